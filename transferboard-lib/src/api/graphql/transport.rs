//! [`QueryTransport`] over GraphQL.

use std::marker::PhantomData;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::de::IgnoredAny;
use serde_json::Value;

use crate::TransferClient;
use crate::api::query::Page;
use crate::error::Error;
use crate::list::CountRequest;
use crate::list::ListView;
use crate::list::PageRequest;
use crate::list::QueryTransport;

use super::document::count_document;
use super::document::page_document;
use super::request::GraphQlRequest;
use super::response::decode_root;
use super::variables::count_variables;
use super::variables::page_variables;

/// Fetches one view's pages and counts from the GraphQL service.
///
/// The query documents are rendered once, when the transport is created.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use transferboard_lib::api::graphql::GraphQlTransport;
/// use transferboard_lib::list::ListController;
/// use transferboard_lib::views::TopTransfers;
///
/// let transport = Arc::new(GraphQlTransport::<TopTransfers>::new(client));
/// let mut controller = ListController::new(transport);
/// controller.refresh();
/// controller.settle().await;
/// ```
pub struct GraphQlTransport<V: ListView> {
    client: TransferClient,
    page_document: String,
    count_document: String,
    _view: PhantomData<fn() -> V>,
}

impl<V: ListView> GraphQlTransport<V> {
    pub fn new(client: TransferClient) -> Self {
        Self {
            client,
            page_document: page_document::<V>(),
            count_document: count_document::<V>(),
            _view: PhantomData,
        }
    }

    async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<Option<T>, Error> {
        let request = GraphQlRequest::new(document, variables, V::OPERATION);
        let body = self.client.execute(&request).await?;
        Ok(decode_root(&body, V::ROOT_FIELD)?)
    }
}

impl<V: ListView> Clone for GraphQlTransport<V> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            page_document: self.page_document.clone(),
            count_document: self.count_document.clone(),
            _view: PhantomData,
        }
    }
}

#[async_trait]
impl<V: ListView> QueryTransport<V> for GraphQlTransport<V> {
    async fn fetch_page(&self, request: &PageRequest<V>) -> Result<Page<V::Row>, Error> {
        let rows: Option<Vec<V::Row>> = self
            .query(&self.page_document, page_variables(request))
            .await?;
        let rows = rows.unwrap_or_default();
        debug!(
            "{}: {} rows at offset {}",
            V::TITLE,
            rows.len(),
            request.offset()
        );
        Ok(Page::new(rows, request.offset(), request.limit()))
    }

    async fn fetch_count(&self, request: &CountRequest<V>) -> Result<usize, Error> {
        let ids: Option<Vec<IgnoredAny>> = self
            .query(&self.count_document, count_variables(request))
            .await?;
        Ok(ids.map_or(0, |ids| ids.len()))
    }
}
