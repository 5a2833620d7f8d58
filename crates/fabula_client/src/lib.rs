//! Story service client for the Fabula interactive story application.
//!
//! This crate provides the outbound half of the application: wire DTOs for
//! the chat-completion format, a reqwest client for an Azure OpenAI
//! deployment, the prompt layer that shapes story and moral-explanation
//! requests, and client configuration.

mod client;
mod config;
mod conversions;
mod dto;
mod teller;

pub use client::AzureChatClient;
pub use config::{API_KEY_VAR, StoryConfig};
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage};
pub use teller::StoryTeller;
