//! Driver trait for story-generation backends.

use crate::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use fabula_error::FabulaResult;

/// Backend capable of servicing generation requests.
///
/// The session state machine is generic over this trait, so tests can
/// substitute scripted drivers for the live HTTP client.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generates a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or the response cannot
    /// be interpreted.
    async fn generate(&self, request: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Returns the provider name for logging and tracing.
    fn provider_name(&self) -> &'static str;

    /// Returns the model name for logging and tracing.
    fn model_name(&self) -> &str;
}
