//! GraphQL-specific error types

use std::collections::HashMap;

use serde::Deserialize;

/// One entry of a GraphQL response's `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Path of the response field that failed, if reported.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
    /// Vendor-specific metadata.
    #[serde(default)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl GraphQlErrorDetail {
    /// Returns the `extensions.code` entry, if present.
    pub fn code(&self) -> Option<&str> {
        self.extensions.get("code").and_then(|c| c.as_str())
    }
}

impl std::fmt::Display for GraphQlErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
