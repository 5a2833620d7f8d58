//! Reqwest client for an Azure OpenAI chat-completion deployment.

use crate::conversions;
use crate::dto::ChatResponse;
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, StoryDriver};
use fabula_error::{FabulaResult, StoryClientError, StoryClientErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for an Azure OpenAI chat-completion deployment.
///
/// The deployment is addressed by URL and authenticated with an `api-key`
/// header. No request timeout is configured; a slow upstream blocks the
/// caller.
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
}

impl AzureChatClient {
    /// Creates a new client for the given endpoint and key.
    #[instrument(skip(api_key), fields(endpoint = %endpoint))]
    pub fn new(endpoint: String, api_key: String, deployment: String) -> Self {
        let client = Client::new();

        debug!(
            endpoint = %endpoint,
            deployment = %deployment,
            "Created Azure chat client"
        );

        Self {
            client,
            endpoint,
            api_key,
            deployment,
        }
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, StoryClientError> {
        let chat_request = conversions::to_chat_request(request)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                StoryClientError::new(StoryClientErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(StoryClientError::new(StoryClientErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            StoryClientError::new(StoryClientErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl StoryDriver for AzureChatClient {
    #[instrument(skip(self, request), fields(deployment = %self.deployment))]
    async fn generate(&self, request: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        Ok(self.send(request).await?)
    }

    fn provider_name(&self) -> &'static str {
        "azure-openai"
    }

    fn model_name(&self) -> &str {
        &self.deployment
    }
}
