//! GraphQL encoding of list requests and decoding of their responses.
//!
//! The list controller only knows [`PageRequest`](crate::list::PageRequest)
//! and [`CountRequest`](crate::list::CountRequest). This module turns them
//! into query documents and variables, and [`GraphQlTransport`] sends them
//! through a [`TransferClient`](crate::TransferClient).

mod document;
mod request;
mod response;
mod transport;
mod variables;

pub use document::count_document;
pub use document::page_document;
pub use request::GraphQlRequest;
pub use response::decode_root;
pub(crate) use response::errors_in;
pub use transport::GraphQlTransport;
pub use variables::count_variables;
pub use variables::filter_input;
pub use variables::filter_json;
pub use variables::ordering_token;
pub use variables::page_variables;
