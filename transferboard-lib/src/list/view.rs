//! View descriptors.
//!
//! Every dashboard table is the same controller parameterised by a
//! [`ListView`]: which columns sort, which filters exist, what a row looks
//! like and how the query API names all of that.

use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// A column a view can be sorted by.
pub trait SortColumn:
    Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static + FromStr<Err = ValidationError>
{
    /// Field name used in the service's ordering enumeration.
    fn field(self) -> &'static str;
}

/// A named free-text filter of a view.
pub trait FilterField:
    Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static + FromStr<Err = ValidationError>
{
    /// Every filter of the view, in display order.
    const ALL: &'static [Self];

    /// Stable identifier of the filter.
    fn name(self) -> &'static str;

    /// How the filter is expressed in a query.
    fn binding(self) -> FilterBinding;
}

/// How a filter value reaches the query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBinding {
    /// A dedicated string argument of the root field, e.g. `countrySubstring`.
    Argument(&'static str),
    /// A `<field>_contains` predicate inside the view's filter input.
    /// Nested paths are dot-separated: `"from_club.name"`.
    Contains(&'static str),
}

/// Static description of one list view.
pub trait ListView: Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static {
    /// Sortable columns.
    type Column: SortColumn;
    /// Filter identifiers.
    type Filter: FilterField;
    /// Shape of one returned row.
    type Row: DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Human-readable title.
    const TITLE: &'static str;
    /// GraphQL operation name.
    const OPERATION: &'static str;
    /// Root query field returning the rows.
    const ROOT_FIELD: &'static str;
    /// GraphQL type of the `orderBy` list elements.
    const ORDERING_TYPE: &'static str;
    /// GraphQL type of the `filter` argument, for views with predicate filters.
    const FILTER_TYPE: Option<&'static str> = None;
    /// Selection set requested for each row.
    const SELECTION: &'static str;
    /// Single field requested by the count query.
    const IDENTITY_FIELD: &'static str;
    /// Allowed page sizes.
    const PAGE_SIZES: &'static [usize] = &[10, 25, 50, 100];
    /// Page size of a freshly mounted view.
    const DEFAULT_PAGE_SIZE: usize = 10;

    /// Sort column of a freshly mounted view.
    fn default_sort() -> Self::Column;
}
