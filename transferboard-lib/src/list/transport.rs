//! The seam between a list controller and the remote query service.

use async_trait::async_trait;

use crate::api::query::Page;
use crate::error::Error;

use super::request::CountRequest;
use super::request::PageRequest;
use super::view::ListView;

/// Executes page and count requests for a view.
///
/// Implementations must not retry on their own: a failure is reported once
/// and the next user intent re-issues the request.
#[async_trait]
pub trait QueryTransport<V: ListView>: Send + Sync {
    /// Fetches exactly one page of rows.
    async fn fetch_page(&self, request: &PageRequest<V>) -> Result<Page<V::Row>, Error>;

    /// Returns the number of rows matching the request's filters.
    async fn fetch_count(&self, request: &CountRequest<V>) -> Result<usize, Error>;
}
