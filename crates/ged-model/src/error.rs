use thiserror::Error;

/// Errors raised by the underlying database store.
///
/// A dangling handle is *not* an error: lookups return `Ok(None)` for
/// missing entities. `DbError` is reserved for actual store failures
/// (corrupt snapshot, failed read), which abort an export pass.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("could not read database snapshot: {0}")]
    Snapshot(String),
    #[error("database read failed: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, DbError>;
