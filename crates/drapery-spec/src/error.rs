//! Error types for parameter parsing and validation.

use thiserror::Error;

/// Errors produced while parsing or validating drapery parameters.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A parameter is outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The pleat id is not part of the catalog.
    #[error("unknown pleat id: {0}")]
    UnknownPleat(String),

    /// The material family is not part of the catalog.
    #[error("unknown material family: {0}")]
    UnknownMaterialFamily(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for backend errors that can be reported uniformly.
///
/// Implementors provide a stable code (e.g. `"PLEAT_002"`) and a category so
/// callers can report errors without matching on every backend enum.
///
/// # Example
///
/// ```ignore
/// use drapery_spec::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
