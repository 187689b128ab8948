//! Query builder: derives remote requests from a [`ListQueryState`].

use std::collections::BTreeMap;

use crate::api::query::OrderBy;

use super::state::ListQueryState;
use super::view::FilterField;
use super::view::ListView;

/// The filters that actually restrict a query.
///
/// Empty values are dropped when the set is built, so an unset filter and a
/// filter on the empty string are indistinguishable here: both mean "no
/// restriction".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSet<F: FilterField> {
    values: BTreeMap<F, String>,
}

impl<F: FilterField> FilterSet<F> {
    /// Builds a filter set from raw values, discarding empty ones.
    pub fn from_raw<'a>(raw: impl IntoIterator<Item = (F, &'a str)>) -> Self {
        let values = raw
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(filter, value)| (filter, value.to_string()))
            .collect();
        Self { values }
    }

    /// Returns the restricting value of a filter, if any.
    pub fn get(&self, filter: F) -> Option<&str> {
        self.values.get(&filter).map(String::as_str)
    }

    /// Returns `true` if no filter restricts the query.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of restricting filters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the restricting filters in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl<F: FilterField> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

/// Request for exactly one page of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<V: ListView> {
    filters: FilterSet<V::Filter>,
    order: OrderBy<V::Column>,
    limit: usize,
    offset: usize,
}

impl<V: ListView> PageRequest<V> {
    pub fn filters(&self) -> &FilterSet<V::Filter> {
        &self.filters
    }

    pub fn order(&self) -> OrderBy<V::Column> {
        self.order
    }

    /// Maximum number of rows (the page size).
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first row (`page * page_size`).
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Request used only to learn how many rows match the filters.
///
/// Carries no limit or offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRequest<V: ListView> {
    filters: FilterSet<V::Filter>,
    order: OrderBy<V::Column>,
}

impl<V: ListView> CountRequest<V> {
    pub fn filters(&self) -> &FilterSet<V::Filter> {
        &self.filters
    }

    pub fn order(&self) -> OrderBy<V::Column> {
        self.order
    }
}

/// The pair of requests derived from one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requests<V: ListView> {
    pub page: PageRequest<V>,
    pub count: CountRequest<V>,
}

/// Derives the page and count requests for `state`.
///
/// Pure and deterministic: equal states always produce equal requests.
pub fn build_requests<V: ListView>(state: &ListQueryState<V>) -> Requests<V> {
    let filters = FilterSet::from_raw(
        state
            .filters()
            .iter()
            .map(|(filter, value)| (*filter, value.as_str())),
    );
    let order = OrderBy::new(state.sort_column(), state.sort_direction());

    Requests {
        page: PageRequest {
            filters: filters.clone(),
            order,
            limit: state.page_size(),
            offset: state.offset(),
        },
        count: CountRequest { filters, order },
    }
}
