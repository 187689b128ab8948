//! Error types

mod api;
mod graphql;
mod validation;

pub use api::*;
pub use graphql::*;
pub use validation::*;

/// Top-level error for transport and controller operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The query transport failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A user intent or external input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns `true` if this error came from the query transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}
