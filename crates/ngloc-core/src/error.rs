// crates/ngloc-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading datasets, loading them into storage, or
/// querying the store.
///
/// Lookups never use [`NgLocError::NotFound`] to signal "no match"; they
/// return `None` or an empty collection instead. `NotFound` is reserved for
/// missing dataset files and missing paths inside a nested dataset.
#[derive(Debug, Error)]
pub enum NgLocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage operation '{operation}' failed")]
    Sqlite {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("expected schema version {expected} but found {found}")]
    SchemaVersion { expected: i64, found: i64 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, NgLocError>;

/// Attaches an operation label to a raw `rusqlite` failure.
pub(crate) trait SqliteContext<T> {
    fn op(self, operation: &'static str) -> Result<T>;
}

impl<T> SqliteContext<T> for std::result::Result<T, rusqlite::Error> {
    #[inline]
    fn op(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| NgLocError::Sqlite { operation, source })
    }
}
