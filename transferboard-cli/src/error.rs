//! CLI error type

use std::sync::Arc;

use transferboard_lib::error::ApiError;
use transferboard_lib::error::Error;
use transferboard_lib::error::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The client could not be built.
    #[error(transparent)]
    Client(#[from] ApiError),

    /// A filter, column or page size was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The view's fetch failed.
    #[error("Fetch failed: {0}")]
    Fetch(Arc<Error>),
}
