//! Fetch coordination and response reconciliation.

use std::sync::Arc;

use log::debug;
use log::warn;

use crate::api::query::Page;
use crate::error::Error;

use super::request::CountRequest;
use super::request::PageRequest;
use super::request::Requests;
use super::request::build_requests;
use super::state::ListQueryState;
use super::view::ListView;

/// Which of the two request lineages a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Page,
    Count,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Page => write!(f, "page"),
            Slot::Count => write!(f, "count"),
        }
    }
}

/// Status of the most recently issued request of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// Nothing issued yet.
    #[default]
    Idle,
    /// Issued and awaiting its response.
    Pending,
    /// Response merged into the view data.
    Fulfilled,
    /// The transport reported an error.
    Failed,
}

/// What happened to a response handed to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response matched the latest request of its slot and was merged.
    Merged,
    /// A newer request had been issued for the slot; the response was dropped.
    Superseded,
}

/// Read-only data a view renders from.
#[derive(Debug, Clone)]
pub struct ViewData<R> {
    rows: Vec<R>,
    total_count: usize,
    is_loading: bool,
    error: Option<Arc<Error>>,
}

impl<R> ViewData<R> {
    /// Rows of the current page, in server order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Last known number of rows matching the filters.
    ///
    /// May briefly lag behind a filter change until its count response lands.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// `true` while a page fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last transport failure, if it has not been cleared by a success.
    pub fn error(&self) -> Option<&Arc<Error>> {
        self.error.as_ref()
    }
}

impl<R> Default for ViewData<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            is_loading: false,
            error: None,
        }
    }
}

/// Requests the coordinator wants issued after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch<V: ListView> {
    pub page: Option<PageRequest<V>>,
    pub count: Option<CountRequest<V>>,
}

impl<V: ListView> Dispatch<V> {
    /// Returns `true` if nothing needs to be issued.
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.count.is_none()
    }
}

#[derive(Debug)]
struct Lineage<Req> {
    issued: Option<Req>,
    status: RequestStatus,
    error: Option<Arc<Error>>,
}

impl<Req: PartialEq> Lineage<Req> {
    fn new() -> Self {
        Self {
            issued: None,
            status: RequestStatus::Idle,
            error: None,
        }
    }

    fn issue(&mut self, request: Req) {
        self.issued = Some(request);
        self.status = RequestStatus::Pending;
    }

    fn is_current(&self, request: &Req) -> bool {
        self.issued.as_ref() == Some(request)
    }

    fn fulfil(&mut self) {
        self.status = RequestStatus::Fulfilled;
        self.error = None;
    }

    fn fail(&mut self, error: Error) {
        self.status = RequestStatus::Failed;
        self.error = Some(Arc::new(error));
    }
}

/// Decides which requests to issue and merges their responses.
///
/// The page request is re-issued whenever it differs from the last one
/// issued (any change to sort, filters, page or page size). The count
/// request is re-issued only when the filters differ from those of the last
/// count request, so sorting and paging never cost a count round-trip.
///
/// A response is merged only if its request is structurally equal to the
/// latest request issued for its slot. Anything else is superseded and never
/// touches [`ViewData`]. A failed request is re-issued on the next dispatch.
#[derive(Debug)]
pub struct FetchCoordinator<V: ListView> {
    page: Lineage<PageRequest<V>>,
    count: Lineage<CountRequest<V>>,
    data: ViewData<V::Row>,
}

impl<V: ListView> FetchCoordinator<V> {
    /// Creates a coordinator with no requests issued and empty view data.
    pub fn new() -> Self {
        Self {
            page: Lineage::new(),
            count: Lineage::new(),
            data: ViewData::default(),
        }
    }

    /// Derives the requests for `state` and returns those that must be issued.
    ///
    /// The returned requests are recorded as pending; the caller is expected
    /// to issue every one of them.
    pub fn dispatch(&mut self, state: &ListQueryState<V>) -> Dispatch<V> {
        let Requests { page, count } = build_requests(state);

        let page = if self.page.is_current(&page) && self.page.status != RequestStatus::Failed {
            None
        } else {
            debug!(
                "{}: issuing page fetch (offset {}, limit {})",
                V::TITLE,
                page.offset(),
                page.limit()
            );
            self.page.issue(page.clone());
            Some(page)
        };

        let filters_changed = self
            .count
            .issued
            .as_ref()
            .is_none_or(|issued| issued.filters() != count.filters());
        let count = if filters_changed || self.count.status == RequestStatus::Failed {
            debug!("{}: issuing count fetch", V::TITLE);
            self.count.issue(count.clone());
            Some(count)
        } else {
            None
        };

        self.data.is_loading = self.page.status == RequestStatus::Pending;
        Dispatch { page, count }
    }

    /// Reconciles the response of a page request.
    ///
    /// A state can return to an earlier value while that value's request is
    /// still in flight (S, S', S). Both requests for S are structurally equal,
    /// so whichever response lands first is merged and clears `is_loading`;
    /// the other carries the same rows and is merged again when it lands.
    pub fn complete_page(
        &mut self,
        request: &PageRequest<V>,
        result: Result<Page<V::Row>, Error>,
    ) -> Outcome {
        if !self.page.is_current(request) {
            debug!(
                "{}: discarding superseded page response (offset {})",
                V::TITLE,
                request.offset()
            );
            return Outcome::Superseded;
        }

        match result {
            Ok(page) => {
                if page.is_empty() && page.offset() > 0 {
                    debug!("{}: no rows at offset {}", V::TITLE, page.offset());
                } else {
                    debug!(
                        "{}: merged {} of {} rows at offset {}",
                        V::TITLE,
                        page.len(),
                        page.limit(),
                        page.offset()
                    );
                }
                self.data.rows = page.into_rows();
                self.page.fulfil();
            }
            Err(e) => {
                warn!("{}: page fetch failed: {}", V::TITLE, e);
                self.page.fail(e);
            }
        }

        self.data.is_loading = false;
        self.refresh_error();
        Outcome::Merged
    }

    /// Reconciles the response of a count request.
    pub fn complete_count(
        &mut self,
        request: &CountRequest<V>,
        result: Result<usize, Error>,
    ) -> Outcome {
        if !self.count.is_current(request) {
            debug!("{}: discarding superseded count response", V::TITLE);
            return Outcome::Superseded;
        }

        match result {
            Ok(total) => {
                debug!("{}: total count {}", V::TITLE, total);
                self.data.total_count = total;
                self.count.fulfil();
            }
            Err(e) => {
                warn!("{}: count fetch failed: {}", V::TITLE, e);
                self.count.fail(e);
            }
        }

        self.refresh_error();
        Outcome::Merged
    }

    /// Returns the data the view renders from.
    pub fn view_data(&self) -> &ViewData<V::Row> {
        &self.data
    }

    /// Returns the status of the latest request of `slot`.
    pub fn status(&self, slot: Slot) -> RequestStatus {
        match slot {
            Slot::Page => self.page.status,
            Slot::Count => self.count.status,
        }
    }

    fn refresh_error(&mut self) {
        self.data.error = self
            .page
            .error
            .clone()
            .or_else(|| self.count.error.clone());
    }
}

impl<V: ListView> Default for FetchCoordinator<V> {
    fn default() -> Self {
        Self::new()
    }
}
