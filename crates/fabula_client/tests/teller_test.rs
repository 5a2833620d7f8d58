//! Tests for prompt construction in the story teller.

use async_trait::async_trait;
use fabula_client::StoryTeller;
use fabula_core::{Animal, GenerateRequest, GenerateResponse, Role, StoryDriver};
use fabula_error::FabulaResult;
use std::sync::Mutex;

/// Mock driver that records every request it receives.
struct RecordingDriver {
    requests: Mutex<Vec<GenerateRequest>>,
}

impl RecordingDriver {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("No request recorded")
            .clone()
    }
}

#[async_trait]
impl StoryDriver for RecordingDriver {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        Ok(GenerateResponse::new("A story."))
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "recording-model-v1"
    }
}

#[tokio::test]
async fn test_story_prompt_shape() {
    let teller = StoryTeller::new(RecordingDriver::new());

    let text = teller
        .generate_story("teamwork", Animal::Dolphin, "")
        .await
        .expect("Generation failed");
    assert_eq!(text, "A story.");

    let request = teller.driver().last_request();
    assert_eq!(request.messages().len(), 2);

    let system = &request.messages()[0];
    assert_eq!(*system.role(), Role::System);
    assert!(system.content().contains("children's story writer"));
    assert!(system.content().contains("3 parts"));
    assert!(system.content().contains("Option A"));
    assert!(system.content().contains("Option B"));
    assert!(system.content().contains("happy ending"));

    let user = &request.messages()[1];
    assert_eq!(*user.role(), Role::User);
    assert_eq!(
        user.content(),
        "The lesson is about teamwork. The story features a Dolphin."
    );

    assert_eq!(*request.temperature(), Some(0.7));
    assert_eq!(*request.top_p(), Some(0.95));
    assert_eq!(*request.max_tokens(), Some(800));
}

#[tokio::test]
async fn test_story_prompt_includes_choice_annotation() {
    let teller = StoryTeller::new(RecordingDriver::new());

    teller
        .generate_story("kindness", Animal::Lion, "Child chose Option A")
        .await
        .expect("Generation failed");

    let request = teller.driver().last_request();
    assert_eq!(
        request.messages()[1].content(),
        "The lesson is about kindness. The story features a Lion. Child chose Option A"
    );
}

#[tokio::test]
async fn test_moral_prompt_shape() {
    let teller = StoryTeller::new(RecordingDriver::new());

    teller
        .explain_moral_choice("patience", Animal::Elephant)
        .await
        .expect("Explanation failed");

    let request = teller.driver().last_request();
    assert_eq!(request.messages().len(), 2);

    let system = &request.messages()[0];
    assert_eq!(*system.role(), Role::System);
    assert!(system.content().contains("educational assistant"));
    assert!(system.content().contains("kind and moral way"));

    let user = &request.messages()[1];
    assert!(user.content().contains("The story features a Elephant"));
    assert!(user.content().contains("teach patience"));
    assert!(user.content().contains("Option B"));

    // Same sampling as story generation, smaller token budget
    assert_eq!(*request.temperature(), Some(0.7));
    assert_eq!(*request.top_p(), Some(0.95));
    assert_eq!(*request.max_tokens(), Some(100));
}
