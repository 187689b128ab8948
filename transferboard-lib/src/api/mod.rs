//! Query API vocabulary and the GraphQL transport

pub mod graphql;
pub mod query;
