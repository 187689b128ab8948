//! Page type for paginated query results.

/// One page of rows, in the order the service returned them.
///
/// Carries the `offset`/`limit` window it was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    rows: Vec<R>,
    offset: usize,
    limit: usize,
}

impl<R> Page<R> {
    /// Creates a page fetched at `offset` with at most `limit` rows.
    pub fn new(rows: Vec<R>, offset: usize, limit: usize) -> Self {
        Self {
            rows,
            offset,
            limit,
        }
    }

    /// Consumes the page and returns the rows.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    /// Returns the offset this page was fetched at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the requested page size.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
