//! GEDCOM 5.5.1 output primitives.
//!
//! This crate owns only the line-level mechanics of the format:
//! level/tag/value lines, CONC/CONT continuation splitting and `DATE`
//! rendering. All export semantics live in `ged-export`.

mod error;
mod writer;

pub use error::{Result, WriterError};
pub use writer::{DEFAULT_LIMIT, GedcomWriter};
