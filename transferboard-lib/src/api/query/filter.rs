//! Filter types for list queries.

/// A filter condition sent to the query API.
///
/// Only substring predicates exist; multiple predicates combine under a
/// logical AND.
///
/// # Example
///
/// ```
/// use transferboard_lib::api::query::Filter;
///
/// let filter = Filter::and([
///     Filter::contains("fromCountry", "Eng"),
///     Filter::contains("toCountry", "Spa"),
/// ]);
///
/// assert!(matches!(filter, Filter::And(ref parts) if parts.len() == 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Substring match on a (possibly nested, dot-separated) field path.
    Contains(String, String),
    /// Logical AND of multiple filters.
    And(Vec<Filter>),
}

impl Filter {
    /// Creates a substring filter on `path`.
    ///
    /// Nested fields use dots: `"from_club.name"`.
    pub fn contains(path: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains(path.into(), value.into())
    }

    /// Creates a logical AND of multiple filters.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_keeps_order() {
        let filter = Filter::and([
            Filter::contains("from_club.name", "Chel"),
            Filter::contains("to_club.name", "Mad"),
        ]);

        assert_eq!(
            filter,
            Filter::And(vec![
                Filter::Contains("from_club.name".to_string(), "Chel".to_string()),
                Filter::Contains("to_club.name".to_string(), "Mad".to_string()),
            ])
        );
    }
}
