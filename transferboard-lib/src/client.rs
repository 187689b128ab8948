//! Main TransferClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::api::graphql::GraphQlRequest;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP client for the transfer query service.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// by every view's transport.
///
/// # Example
///
/// ```ignore
/// use transferboard_lib::TransferClient;
///
/// let client = TransferClient::builder()
///     .endpoint("http://localhost:4001/graphql")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct TransferClient {
    inner: Arc<TransferClientInner>,
}

struct TransferClientInner {
    endpoint: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl TransferClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> TransferClientBuilder<Missing> {
        TransferClientBuilder::new()
    }

    /// Posts a GraphQL request and returns the raw response body.
    ///
    /// Non-success statuses become [`ApiError::Http`], unless the body carries
    /// a GraphQL `errors` array, which is reported as [`ApiError::GraphQl`].
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<String, ApiError> {
        debug!("POST {} operation={}", self.inner.endpoint, request.operation_name);

        let mut builder = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(request);

        if let Some(timeout) = self.inner.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        if status.is_success() {
            return Ok(body);
        }

        match crate::api::graphql::errors_in(&body) {
            Some(errors) => Err(ApiError::GraphQl { errors }),
            None => Err(ApiError::http(status.as_u16(), body)),
        }
    }

    /// Returns the GraphQL endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Returns the request timeout, if one is applied.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    fn map_error(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

impl std::fmt::Debug for TransferClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`TransferClient`].
///
/// Uses the typestate pattern so `build` is only available once the
/// endpoint has been set.
pub struct TransferClientBuilder<Endpoint> {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl TransferClientBuilder<Missing> {
    /// Creates a new builder with no timeouts set.
    pub fn new() -> Self {
        Self {
            endpoint: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the GraphQL endpoint URL.
    ///
    /// The URL is validated by [`build`](TransferClientBuilder::build).
    pub fn endpoint(self, url: impl Into<String>) -> TransferClientBuilder<Set<String>> {
        TransferClientBuilder {
            endpoint: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for TransferClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TransferClientBuilder<E> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Only applied when the builder creates the HTTP client itself.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Applies both timeouts from a [`ClientConfig`].
    pub fn config(self, config: &ClientConfig) -> Self {
        self.timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl TransferClientBuilder<Set<String>> {
    /// Builds the [`TransferClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the endpoint is not an absolute
    /// `http`/`https` URL, or [`ApiError::Network`] if the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<TransferClient, ApiError> {
        let raw = self.endpoint.0;
        let endpoint = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{raw}: unsupported scheme `{}`",
                endpoint.scheme()
            )));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(TransferClient {
            inner: Arc::new(TransferClientInner {
                endpoint,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_applies_config() {
        let client = TransferClient::builder()
            .endpoint("http://localhost:4001/graphql")
            .config(&ClientConfig::default().with_timeout(Duration::from_secs(5)))
            .build()
            .expect("valid endpoint");

        assert_eq!(client.endpoint().as_str(), "http://localhost:4001/graphql");
        assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_rejects_relative_url() {
        let err = TransferClient::builder()
            .endpoint("/graphql")
            .build()
            .expect_err("relative url");
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let err = TransferClient::builder()
            .endpoint("ftp://example.com/graphql")
            .build()
            .expect_err("ftp scheme");
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
