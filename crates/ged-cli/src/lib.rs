//! CLI components for the GEDCOM exporter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
