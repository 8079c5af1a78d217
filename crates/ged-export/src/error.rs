use std::path::PathBuf;

use thiserror::Error;

/// Fatal export failures.
///
/// Lookup misses and missing media files never surface here; they are
/// recovered locally and recorded on the diagnostics channel. Database
/// failures and I/O failures are kept distinct so the caller can show
/// different messages for "your data store broke" and "your disk broke".
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("archive error on {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error(transparent)]
    Db(#[from] ged_model::DbError),
    #[error(transparent)]
    Writer(#[from] ged_writer::WriterError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
