//! The POST body of a GraphQL request.

use serde::Serialize;
use serde_json::Value;

/// A GraphQL request: document, variables and operation name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
    pub operation_name: String,
}

impl GraphQlRequest {
    pub fn new(
        query: impl Into<String>,
        variables: Value,
        operation_name: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: operation_name.into(),
        }
    }
}
