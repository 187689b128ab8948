//! Response decoding.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

use crate::error::ApiError;
use crate::error::GraphQlErrorDetail;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorDetail>>,
}

/// Decodes the value of the `root` field from a response body.
///
/// A missing or `null` root decodes as `None`; the service does not tell
/// "no result" apart from an empty one. A non-empty `errors` array is an
/// [`ApiError::GraphQl`] even when partial data is present.
pub fn decode_root<T: DeserializeOwned>(body: &str, root: &str) -> Result<Option<T>, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        return Err(ApiError::GraphQl { errors });
    }

    match envelope.data.and_then(|mut data| data.remove(root)) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::parse_with_body(format!("invalid `{root}`: {e}"), body)),
    }
}

/// Returns the `errors` array of a body, if it is a GraphQL response carrying
/// at least one error.
pub(crate) fn errors_in(body: &str) -> Option<Vec<GraphQlErrorDetail>> {
    serde_json::from_str::<Envelope>(body)
        .ok()?
        .errors
        .filter(|errors| !errors.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[test]
    fn test_decode_rows() {
        let body = r#"{ "data": { "moneyFlow": [{ "fromCountry": "Spain" }, { "fromCountry": "Italy" }] } }"#;
        let rows: Option<Vec<IgnoredAny>> = decode_root(body, "moneyFlow").expect("decodes");
        assert_eq!(rows.map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_null_root_is_empty() {
        let rows: Option<Vec<IgnoredAny>> =
            decode_root(r#"{ "data": { "Transfer": null } }"#, "Transfer").expect("decodes");
        assert!(rows.is_none());

        let rows: Option<Vec<IgnoredAny>> =
            decode_root(r#"{ "data": null }"#, "Transfer").expect("decodes");
        assert!(rows.is_none());
    }

    #[test]
    fn test_errors_array_is_an_error() {
        let body = r#"{
            "data": null,
            "errors": [{ "message": "Cannot query field \"nope\"", "extensions": { "code": "GRAPHQL_VALIDATION_FAILED" } }]
        }"#;
        let err = decode_root::<Vec<IgnoredAny>>(body, "Transfer").expect_err("errors present");

        assert_eq!(err.graphql_errors().len(), 1);
        assert_eq!(err.graphql_errors()[0].code(), Some("GRAPHQL_VALIDATION_FAILED"));
        assert!(err.to_string().contains("Cannot query field"));
    }

    #[test]
    fn test_empty_errors_array_is_ignored() {
        let rows: Option<Vec<IgnoredAny>> =
            decode_root(r#"{ "data": { "x": [] }, "errors": [] }"#, "x").expect("decodes");
        assert_eq!(rows.map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_errors_in_error_status_body() {
        let body = r#"{ "errors": [{ "message": "Variable \"$first\" got invalid value" }] }"#;
        assert_eq!(errors_in(body).map(|e| e.len()), Some(1));
        assert!(errors_in("Bad Gateway").is_none());
        assert!(errors_in(r#"{ "data": {} }"#).is_none());
    }

    #[test]
    fn test_malformed_body_keeps_body() {
        let err = decode_root::<Vec<IgnoredAny>>("<html>", "x").expect_err("not json");
        match err {
            ApiError::Parse { body, .. } => assert_eq!(body.as_deref(), Some("<html>")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }
}
