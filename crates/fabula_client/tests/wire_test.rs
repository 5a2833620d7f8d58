//! Tests for the chat-completion wire format.

use fabula_client::{ChatResponse, from_chat_response, to_chat_request};
use fabula_core::{GenerateRequest, Message, Role};
use fabula_error::StoryClientErrorKind;

#[test]
fn test_request_serialization_matches_wire_shape() {
    let request = GenerateRequest::builder()
        .messages(vec![
            Message::new(Role::System, "You are a storyteller."),
            Message::new(Role::User, "Tell me about penguins."),
        ])
        .temperature(Some(0.7))
        .top_p(Some(0.95))
        .max_tokens(Some(800))
        .build()
        .expect("Valid request");

    let chat_request = to_chat_request(&request).expect("Conversion failed");
    let body = serde_json::to_value(&chat_request).expect("Serialization failed");

    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "You are a storyteller.");
    assert_eq!(body["messages"][1]["role"], "user");
    // f32 values widen to f64 during serialization
    let temperature = body["temperature"].as_f64().expect("Expected a number");
    assert!((temperature - 0.7).abs() < 1e-6);
    let top_p = body["top_p"].as_f64().expect("Expected a number");
    assert!((top_p - 0.95).abs() < 1e-6);
    assert_eq!(body["max_tokens"], 800);
}

#[test]
fn test_unset_sampling_fields_are_omitted() {
    let request = GenerateRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .build()
        .expect("Valid request");

    let chat_request = to_chat_request(&request).expect("Conversion failed");
    let body = serde_json::to_value(&chat_request).expect("Serialization failed");

    let object = body.as_object().expect("Expected JSON object");
    assert!(!object.contains_key("temperature"));
    assert!(!object.contains_key("top_p"));
    assert!(!object.contains_key("max_tokens"));
}

#[test]
fn test_response_deserialization_takes_first_choice() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "Once upon a time."}, "finish_reason": "stop"},
            {"message": {"role": "assistant", "content": "Ignored second choice."}}
        ],
        "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
    }"#;

    let chat_response: ChatResponse = serde_json::from_str(body).expect("Deserialization failed");
    let response = from_chat_response(&chat_response).expect("Conversion failed");

    assert_eq!(response.content(), "Once upon a time.");
}

#[test]
fn test_response_without_usage_deserializes() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Hi"}}]}"#;

    let chat_response: ChatResponse = serde_json::from_str(body).expect("Deserialization failed");

    assert!(chat_response.usage.is_none());
    let response = from_chat_response(&chat_response).expect("Conversion failed");
    assert_eq!(response.content(), "Hi");
}

#[test]
fn test_empty_choices_is_missing_content() {
    let body = r#"{"choices": []}"#;

    let chat_response: ChatResponse = serde_json::from_str(body).expect("Deserialization failed");
    let err = from_chat_response(&chat_response).expect_err("Expected an error");

    assert!(matches!(err.kind, StoryClientErrorKind::MissingContent));
}

#[test]
fn test_assistant_role_round_trip() {
    let request = GenerateRequest::builder()
        .messages(vec![
            Message::new(Role::User, "First part please."),
            Message::new(Role::Assistant, "Here is part one."),
            Message::new(Role::User, "Continue."),
        ])
        .build()
        .expect("Valid request");

    let chat_request = to_chat_request(&request).expect("Conversion failed");

    let roles: Vec<&str> = chat_request
        .messages()
        .iter()
        .map(|m| m.role.as_str())
        .collect();
    assert_eq!(roles, vec!["user", "assistant", "user"]);
}
