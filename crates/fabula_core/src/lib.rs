//! Core data types for the Fabula interactive story application.
//!
//! This crate provides the foundation data types used across the Fabula
//! workspace: conversation messages, generation requests, the driver trait
//! seam, and the story-animal vocabulary.

mod animal;
mod driver;
mod message;
mod request;
mod role;

pub use animal::Animal;
pub use driver::StoryDriver;
pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
