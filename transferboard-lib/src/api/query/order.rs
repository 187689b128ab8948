//! Ordering types for list queries.

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    #[default]
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Returns the suffix used in ordering tokens (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Specifies the ordering of query results: one column and a direction.
///
/// The column and direction stay separate here; they are only combined into
/// the service's `<field>_<direction>` token when a request is encoded.
///
/// # Example
///
/// ```
/// use transferboard_lib::api::query::{Direction, OrderBy};
///
/// let order = OrderBy::new("moneySpent", Direction::Desc);
/// assert_eq!(order.direction(), Direction::Desc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderBy<C> {
    column: C,
    direction: Direction,
}

impl<C: Copy> OrderBy<C> {
    /// Creates an ordering on `column` in the given direction.
    pub fn new(column: C, direction: Direction) -> Self {
        Self { column, direction }
    }

    /// Returns the sort column.
    pub fn column(&self) -> C {
        self.column
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
