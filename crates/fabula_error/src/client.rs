//! Story service client error types.

/// Specific error conditions for story service calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoryClientErrorKind {
    /// HTTP/network error reaching the completion endpoint
    Http(String),
    /// Endpoint returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the endpoint
        message: String,
    },
    /// Failed to parse the response envelope
    ResponseParsing(String),
    /// Response contained no completion content
    MissingContent,
    /// Failed to build the outbound request
    Builder(String),
}

impl std::fmt::Display for StoryClientErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryClientErrorKind::Http(msg) => write!(f, "HTTP error: {}", msg),
            StoryClientErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            StoryClientErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            StoryClientErrorKind::MissingContent => {
                write!(f, "No completion content in response")
            }
            StoryClientErrorKind::Builder(msg) => write!(f, "Builder error: {}", msg),
        }
    }
}

/// Error type for story service operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{StoryClientError, StoryClientErrorKind};
///
/// let err = StoryClientError::new(StoryClientErrorKind::MissingContent);
/// assert!(format!("{}", err).contains("No completion content"));
/// ```
#[derive(Debug, Clone)]
pub struct StoryClientError {
    /// The specific error condition
    pub kind: StoryClientErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryClientError {
    /// Create a new StoryClientError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StoryClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Story Client Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StoryClientError {}
