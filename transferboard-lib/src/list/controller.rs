//! Drives one view: intents in, fetches out, responses merged back.

use std::sync::Arc;

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;

use crate::api::query::Page;
use crate::error::Error;
use crate::error::ValidationError;

use super::coordinator::FetchCoordinator;
use super::coordinator::Outcome;
use super::coordinator::RequestStatus;
use super::coordinator::Slot;
use super::coordinator::ViewData;
use super::request::CountRequest;
use super::request::PageRequest;
use super::state::ListQueryState;
use super::transport::QueryTransport;
use super::view::ListView;

enum Response<V: ListView> {
    Page(PageRequest<V>, Result<Page<V::Row>, Error>),
    Count(CountRequest<V>, Result<usize, Error>),
}

/// Result of reconciling one finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Which request lineage the fetch belonged to.
    pub slot: Slot,
    /// Whether it was merged or dropped as superseded.
    pub outcome: Outcome,
}

/// The list controller of one view instance.
///
/// Owns the view's state and fetch bookkeeping. All mutation happens through
/// `&mut self`, so a controller needs no locks; in-flight fetches run
/// concurrently with further intents and are reconciled one at a time by
/// [`next_completion`](Self::next_completion).
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(GraphQlTransport::<ClubSpending>::new(client));
/// let mut clubs = ListController::new(transport);
///
/// clubs.refresh();
/// clubs.set_filter(ClubSpendingFilter::Country, "Eng");
/// clubs.settle().await;
///
/// for row in clubs.view_data().rows() {
///     println!("{} {}", row.club, row.money_spent.format_gbp());
/// }
/// ```
pub struct ListController<V: ListView, T> {
    state: ListQueryState<V>,
    coordinator: FetchCoordinator<V>,
    transport: Arc<T>,
    in_flight: FuturesUnordered<BoxFuture<'static, Response<V>>>,
}

impl<V, T> ListController<V, T>
where
    V: ListView,
    T: QueryTransport<V> + 'static,
{
    /// Creates a controller with the view's default state.
    ///
    /// Nothing is fetched until [`refresh`](Self::refresh) or an intent.
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_state(transport, ListQueryState::new())
    }

    /// Creates a controller starting from `state`.
    pub fn with_state(transport: Arc<T>, state: ListQueryState<V>) -> Self {
        Self {
            state,
            coordinator: FetchCoordinator::new(),
            transport,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Issues whatever the current state still needs: everything on mount,
    /// failed requests afterwards.
    pub fn refresh(&mut self) {
        self.dispatch();
    }

    /// Sort intent: toggles the direction or switches column.
    pub fn set_sort(&mut self, column: V::Column) {
        let next = self.state.set_sort(column);
        self.transition(next);
    }

    /// Filter intent.
    pub fn set_filter(&mut self, filter: V::Filter, value: impl Into<String>) {
        let next = self.state.set_filter(filter, value);
        self.transition(next);
    }

    /// Page-change intent.
    pub fn set_page(&mut self, page: usize) {
        let next = self.state.set_page(page);
        self.transition(next);
    }

    /// Page-size intent. Rejected sizes leave the state untouched.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ValidationError> {
        let next = self.state.set_page_size(page_size)?;
        self.transition(next);
        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> &ListQueryState<V> {
        &self.state
    }

    /// Returns the data to render.
    pub fn view_data(&self) -> &ViewData<V::Row> {
        self.coordinator.view_data()
    }

    /// Returns the status of the latest request of `slot`.
    pub fn status(&self, slot: Slot) -> RequestStatus {
        self.coordinator.status(slot)
    }

    /// Returns the number of fetches still outstanding, superseded ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Waits for the next fetch to finish and reconciles it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let response = self.in_flight.next().await?;

        let completion = match response {
            Response::Page(request, result) => Completion {
                slot: Slot::Page,
                outcome: self.coordinator.complete_page(&request, result),
            },
            Response::Count(request, result) => Completion {
                slot: Slot::Count,
                outcome: self.coordinator.complete_count(&request, result),
            },
        };

        Some(completion)
    }

    /// Reconciles every outstanding fetch.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    fn transition(&mut self, next: ListQueryState<V>) {
        self.state = next;
        self.dispatch();
    }

    fn dispatch(&mut self) {
        let dispatch = self.coordinator.dispatch(&self.state);

        if let Some(request) = dispatch.page {
            let transport = Arc::clone(&self.transport);
            self.in_flight.push(Box::pin(async move {
                let result = transport.fetch_page(&request).await;
                Response::Page(request, result)
            }));
        }

        if let Some(request) = dispatch.count {
            let transport = Arc::clone(&self.transport);
            self.in_flight.push(Box::pin(async move {
                let result = transport.fetch_count(&request).await;
                Response::Count(request, result)
            }));
        }
    }
}
