//! GEDCOM 5.5.1 export with Geneanet portal extensions.
//!
//! Turns a genealogy database snapshot into a deterministic GEDCOM
//! file: witness `ASSO` links, godparent roles on baptisms, `_UST`
//! cohabitation markers, privacy flags, and an optional zip sidecar
//! holding the referenced media files.

pub mod associates;
pub mod attrs;
pub mod citations;
pub mod diagnostics;
pub mod error;
pub mod exporter;
pub mod header;
pub mod media;
pub mod name;
pub mod options;

pub use associates::{Associate, Relationship};
pub use attrs::{AttributeDisposition, map_attribute};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{ExportError, Result};
pub use exporter::{ExportSummary, export_file, export_to_vec, export_to_writer};
pub use options::ExportOptions;
