//! Transfer dashboard client library
//!
//! Paginated, sortable, filterable list views over the football transfer
//! GraphQL API. Each view is driven by a [`list::ListController`] that keeps
//! its page and total-count queries consistent with the user's intents.

pub mod api;
pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod views;

mod client;

pub use client::*;
pub use config::ClientConfig;
