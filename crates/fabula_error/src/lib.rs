//! Error types for the Fabula interactive story application.
//!
//! This crate provides the foundation error types used throughout the
//! Fabula workspace.

mod client;
mod config;
mod session;

pub use client::{StoryClientError, StoryClientErrorKind};
pub use config::ConfigError;
pub use session::{SessionError, SessionErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum FabulaErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Story service client error
    Client(StoryClientError),
    /// Session state machine error
    Session(SessionError),
}

impl std::fmt::Display for FabulaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FabulaErrorKind::Config(e) => write!(f, "{}", e),
            FabulaErrorKind::Client(e) => write!(f, "{}", e),
            FabulaErrorKind::Session(e) => write!(f, "{}", e),
        }
    }
}

/// Fabula error with kind discrimination.
#[derive(Debug)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FabulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fabula Error: {}", self.0)
    }
}

impl std::error::Error for FabulaError {}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
