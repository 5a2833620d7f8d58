//! Prompt construction for story generation and moral explanations.

use fabula_core::{Animal, GenerateRequest, Message, Role, StoryDriver};
use fabula_error::{FabulaResult, StoryClientError, StoryClientErrorKind};
use tracing::{debug, instrument};

/// System instruction for story generation.
const STORY_SYSTEM_PROMPT: &str = "\
You are a children's story writer. Create an engaging, educational story for kids aged 3-5.
1. The story has 3 parts.
2. Include two decision points where the child selects:
   - Option A: Correct choice that progresses the story.
   - Option B: A gentle consequence, explaining why it is not the best choice.
3. Teach two animal facts in Part 1.
4. Pause after each decision point, waiting for input.
5. The story should reinforce learning and have a happy ending.";

/// System instruction for moral explanations.
const MORAL_SYSTEM_PROMPT: &str = "\
You are an educational assistant for children aged 3-5. Explain moral lessons gently and clearly.
When a child makes an incorrect choice (Option B), explain why it is not the best choice in a kind and moral way.
The explanation should relate to the story, teaching a positive value or lesson.";

/// Sampling temperature for both call shapes.
const TEMPERATURE: f32 = 0.7;
/// Nucleus sampling parameter for both call shapes.
const TOP_P: f32 = 0.95;
/// Token budget for story segments.
const STORY_MAX_TOKENS: u32 = 800;
/// Token budget for moral explanations.
const MORAL_MAX_TOKENS: u32 = 100;

/// Builds prompts and drives a backend to produce story text.
///
/// The two call shapes differ only in system instruction and token budget.
pub struct StoryTeller<D: StoryDriver> {
    driver: D,
}

impl<D: StoryDriver> StoryTeller<D> {
    /// Create a new story teller over the given backend.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Get a reference to the underlying backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a story segment.
    ///
    /// `choice` annotates the prior decision ("Child chose Option A");
    /// it is empty on the opening call.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or the response is
    /// empty.
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn generate_story(
        &self,
        goal: &str,
        animal: Animal,
        choice: &str,
    ) -> FabulaResult<String> {
        let mut user_prompt = format!(
            "The lesson is about {}. The story features a {}.",
            goal, animal
        );
        if !choice.is_empty() {
            user_prompt.push(' ');
            user_prompt.push_str(choice);
        }

        let request = GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, STORY_SYSTEM_PROMPT),
                Message::new(Role::User, user_prompt),
            ])
            .temperature(Some(TEMPERATURE))
            .top_p(Some(TOP_P))
            .max_tokens(Some(STORY_MAX_TOKENS))
            .build()
            .map_err(|e| {
                StoryClientError::new(StoryClientErrorKind::Builder(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;
        debug!(length = response.content().len(), "Story segment received");

        Ok(response.content().clone())
    }

    /// Explain gently why Option B was not the best choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or the response is
    /// empty.
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn explain_moral_choice(&self, goal: &str, animal: Animal) -> FabulaResult<String> {
        let user_prompt = format!(
            "The story features a {}, and the goal is to teach {}. \
             Provide a short, concise moral explanation for why Option B is not the best choice.",
            animal, goal
        );

        let request = GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, MORAL_SYSTEM_PROMPT),
                Message::new(Role::User, user_prompt),
            ])
            .temperature(Some(TEMPERATURE))
            .top_p(Some(TOP_P))
            .max_tokens(Some(MORAL_MAX_TOKENS))
            .build()
            .map_err(|e| {
                StoryClientError::new(StoryClientErrorKind::Builder(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;
        debug!(
            length = response.content().len(),
            "Moral explanation received"
        );

        Ok(response.content().clone())
    }
}
