/// Convenience result type used across the grocery core.
pub type GroceryResult<T> = Result<T, GroceryError>;

/// Errors the core surfaces to callers.
///
/// Persistence failures never appear here: a malformed or missing record
/// falls back to defaults and a refused write keeps the previous slot
/// contents, both logged rather than returned.
#[derive(thiserror::Error, Debug)]
pub enum GroceryError {
    /// Errors while rendering the list into a PDF document.
    #[error("pdf error: {0}")]
    Pdf(String),
}

impl GroceryError {
    /// Build a [`GroceryError::Pdf`] value.
    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf(msg.into())
    }
}
