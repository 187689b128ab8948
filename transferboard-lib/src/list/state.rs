//! Sort, filter and pagination state of one list view.

use std::collections::BTreeMap;

use crate::api::query::Direction;
use crate::error::ValidationError;

use super::view::FilterField;
use super::view::ListView;

/// The user-controlled state of a list view.
///
/// Every intent produces a new state; a state is never mutated in place.
/// The row offset is always derived from `page` and `page_size` and is never
/// stored.
///
/// # Example
///
/// ```
/// use transferboard_lib::list::ListQueryState;
/// use transferboard_lib::views::{ClubSpending, ClubSpendingColumn, ClubSpendingFilter};
///
/// let state = ListQueryState::<ClubSpending>::new()
///     .set_filter(ClubSpendingFilter::Country, "Eng")
///     .set_page(2);
///
/// assert_eq!(state.offset(), 20);
///
/// let resorted = state.set_sort(ClubSpendingColumn::Profit);
/// assert_eq!(resorted.page(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState<V: ListView> {
    sort_column: V::Column,
    sort_direction: Direction,
    page: usize,
    page_size: usize,
    filters: BTreeMap<V::Filter, String>,
}

impl<V: ListView> ListQueryState<V> {
    /// Creates the state of a freshly mounted view: default sort column,
    /// descending, first page, default page size and every filter empty.
    pub fn new() -> Self {
        Self {
            sort_column: V::default_sort(),
            sort_direction: Direction::Desc,
            page: 0,
            page_size: V::DEFAULT_PAGE_SIZE,
            filters: V::Filter::ALL
                .iter()
                .map(|filter| (*filter, String::new()))
                .collect(),
        }
    }

    /// Toggles sorting on `column`.
    ///
    /// Clicking the current column flips the direction; clicking another
    /// column selects it in descending order. Either way the view returns to
    /// the first page.
    #[must_use]
    pub fn set_sort(&self, column: V::Column) -> Self {
        let sort_direction = if column == self.sort_column {
            self.sort_direction.toggle()
        } else {
            Direction::Desc
        };

        Self {
            sort_column: column,
            sort_direction,
            page: 0,
            ..self.clone()
        }
    }

    /// Replaces the value of one filter and returns to the first page.
    #[must_use]
    pub fn set_filter(&self, filter: V::Filter, value: impl Into<String>) -> Self {
        let mut filters = self.filters.clone();
        filters.insert(filter, value.into());

        Self {
            filters,
            page: 0,
            ..self.clone()
        }
    }

    /// Moves to a zero-based page. Sort and filters are kept.
    #[must_use]
    pub fn set_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Changes the page size.
    ///
    /// The current page is deliberately kept, so a large page number with a
    /// larger page size can point past the last row and yield an empty page.
    pub fn set_page_size(&self, page_size: usize) -> Result<Self, ValidationError> {
        if !V::PAGE_SIZES.contains(&page_size) {
            return Err(ValidationError::PageSize {
                size: page_size,
                allowed: V::PAGE_SIZES,
            });
        }

        Ok(Self {
            page_size,
            ..self.clone()
        })
    }

    /// Returns the sort column.
    pub fn sort_column(&self) -> V::Column {
        self.sort_column
    }

    /// Returns the sort direction.
    pub fn sort_direction(&self) -> Direction {
        self.sort_direction
    }

    /// Returns the zero-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the index of the first row of the current page.
    ///
    /// Saturates at `usize::MAX`; such an offset is past every result and
    /// yields an empty page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Returns the raw value of a filter (empty when unset).
    pub fn filter(&self, filter: V::Filter) -> &str {
        self.filters.get(&filter).map(String::as_str).unwrap_or("")
    }

    /// Returns every filter with its raw value.
    pub fn filters(&self) -> &BTreeMap<V::Filter, String> {
        &self.filters
    }
}

impl<V: ListView> Default for ListQueryState<V> {
    fn default() -> Self {
        Self::new()
    }
}
