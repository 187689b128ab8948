//! API error types

use std::time::Duration;

use super::GraphQlErrorDetail;

/// Errors that can occur while talking to the query API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the API.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The service answered but reported query errors.
    #[error("GraphQL error: {}", first_message(.errors))]
    GraphQl {
        /// Errors reported in the response's `errors` array.
        errors: Vec<GraphQlErrorDetail>,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid endpoint URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

fn first_message(errors: &[GraphQlErrorDetail]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("unknown")
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the service-reported errors, if any.
    pub fn graphql_errors(&self) -> &[GraphQlErrorDetail] {
        match self {
            Self::GraphQl { errors } => errors,
            _ => &[],
        }
    }
}
