//! Tests against a live Azure OpenAI deployment.
//!
//! These tests require a reachable deployment and FABULA_API_KEY in the
//! environment (or a .env file).
//!
//! Run with: cargo test --package fabula_client --features api -- --ignored

#![cfg(feature = "api")]

use fabula_client::{StoryConfig, StoryTeller};
use fabula_core::Animal;

#[tokio::test]
#[ignore] // Requires a live deployment
async fn test_live_story_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = StoryConfig::load(None)?;
    config.validate()?;

    let teller = StoryTeller::new(config.into_client());
    let story = teller.generate_story("kindness", Animal::Lion, "").await?;

    assert!(!story.is_empty());
    println!("Story: {}", story);
    Ok(())
}

#[tokio::test]
#[ignore] // Requires a live deployment
async fn test_live_moral_explanation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = StoryConfig::load(None)?;
    config.validate()?;

    let teller = StoryTeller::new(config.into_client());
    let explanation = teller.explain_moral_choice("kindness", Animal::Lion).await?;

    assert!(!explanation.is_empty());
    println!("Explanation: {}", explanation);
    Ok(())
}
