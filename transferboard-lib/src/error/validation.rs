//! Validation error types

/// Rejected user intents and unrecognised external names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The page size is not one of the view's allowed sizes.
    #[error("Page size {size} is not allowed (expected one of {allowed:?})")]
    PageSize {
        size: usize,
        allowed: &'static [usize],
    },

    /// No filter with this name exists in the view.
    #[error("Unknown filter '{name}' for {view}")]
    UnknownFilter { view: &'static str, name: String },

    /// No sortable column with this name exists in the view.
    #[error("Unknown sort column '{name}' for {view}")]
    UnknownColumn { view: &'static str, name: String },
}

impl ValidationError {
    /// Creates an unknown filter error.
    pub fn unknown_filter(view: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownFilter {
            view,
            name: name.into(),
        }
    }

    /// Creates an unknown column error.
    pub fn unknown_column(view: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownColumn {
            view,
            name: name.into(),
        }
    }
}
