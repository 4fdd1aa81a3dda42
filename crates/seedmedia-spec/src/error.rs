//! Error types shared by the media backends.

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the orchestrator can
/// report failures uniformly:
/// - Consistent error codes for reporting
/// - Human-readable messages for users
/// - Conversion into the type-erased [`GenerationError`]
///
/// # Example
///
/// ```ignore
/// use seedmedia_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "ARTWORK_002".
    /// These codes are stable and can be matched on programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    ///
    /// Returns a category like "audio", "artwork", or "config".
    fn category(&self) -> &'static str;
}

/// A unified error type that can wrap any backend error.
///
/// Per-item failures are converted into this type before being reported,
/// so the orchestrator never needs to know which backend produced them.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "AUDIO_001", "ARTWORK_002").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category (e.g., "audio", "artwork").
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a `GenerationError` with explicit values.
    ///
    /// Used for orchestration-level failures such as a file write that
    /// failed after the backend succeeded.
    pub fn new(code: &'static str, message: impl Into<String>, category: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            source: None,
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
