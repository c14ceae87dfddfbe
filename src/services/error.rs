use thiserror::Error;

use super::validation::FieldError;

/// What a service call can refuse with. The web layer turns these into
/// HTTP responses; entity misses travel as `Option`/`bool` instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected before anything was written.
    #[error("{}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
    /// Underlying database failure.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl From<FieldError> for ServiceError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Db(e) => Self::Db(e),
            other => Self::Invalid {
                errors: vec![other.to_string()],
            },
        }
    }
}
