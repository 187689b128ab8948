//! Transport-neutral query types.
//!
//! - [`Filter`] - substring predicates combined under `AND`
//! - [`OrderBy`] - a sort column with its [`Direction`]
//! - [`Page`] - one page of rows together with the window it was fetched for

mod filter;
mod order;
mod page;

pub use filter::Filter;
pub use order::Direction;
pub use order::OrderBy;
pub use page::Page;
