use thiserror::Error;

use crate::validation::FieldErrors;

/// Failures a store operation can produce. Controllers map these to
/// status codes; nothing is retried or deferred.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found")]
    NotFound,

    #[error("invalid note payload")]
    Validation(FieldErrors),
}
