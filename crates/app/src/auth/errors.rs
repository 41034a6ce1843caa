//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The presented bearer token matches no active credential. Covers
    /// unknown and revoked tokens alike.
    #[error("unknown or revoked token")]
    UnknownToken,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
