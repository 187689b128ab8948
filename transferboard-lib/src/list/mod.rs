//! Paginated list query controller.
//!
//! A list view is driven by three cooperating pieces:
//!
//! - [`ListQueryState`] - sort, filter and pagination state, updated only
//!   through explicit intents
//! - [`build_requests`] - derives the page and total-count requests from a
//!   state, with no I/O
//! - [`FetchCoordinator`] - decides which requests to (re-)issue and
//!   reconciles asynchronous responses into [`ViewData`]
//!
//! [`ListController`] ties them to a [`QueryTransport`].

mod controller;
mod coordinator;
mod pagination;
mod request;
mod state;
mod transport;
mod view;

pub use controller::Completion;
pub use controller::ListController;
pub use coordinator::Dispatch;
pub use coordinator::FetchCoordinator;
pub use coordinator::Outcome;
pub use coordinator::RequestStatus;
pub use coordinator::Slot;
pub use coordinator::ViewData;
pub use pagination::page_count;
pub use pagination::pagination_label;
pub use request::CountRequest;
pub use request::FilterSet;
pub use request::PageRequest;
pub use request::Requests;
pub use request::build_requests;
pub use state::ListQueryState;
pub use transport::QueryTransport;
pub use view::FilterBinding;
pub use view::FilterField;
pub use view::ListView;
pub use view::SortColumn;
