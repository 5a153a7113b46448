use backend::chat::{FALLBACK_REPLY, MISSING_KEY_REPLY};
use common::{ChatReply, Skill};
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

mod helpers;
use crate::helpers::test_config;

async fn spawn_with_provider(server: &MockServer, api_key: Option<&str>) -> helpers::TestApp {
    let mut config = test_config();
    config.chat.base_url = server.base_url();
    config.chat.api_key = api_key.map(str::to_string);
    config.chat.owner_name = "Ada".to_string();
    helpers::spawn_app_with(config, None).await
}

#[tokio::test]
async fn test_chat_returns_the_provider_reply() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, Some("test-key")).await;
    app.store
        .insert(Skill {
            name: "Rust".to_string(),
            category: "Language".to_string(),
            icon: "SiRust".to_string(),
            color: None,
        })
        .await
        .unwrap();

    let completion = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("openai/gpt-3.5-turbo")
                .body_contains("Ada's Portfolio website")
                .body_contains(r#"\"name\":\"Rust\""#)
                .body_contains("What do you build?");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Mostly web apps." } }]
            }));
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "What do you build?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: ChatReply = response.json().await.unwrap();
    assert_eq!(reply.reply, "Mostly web apps.");
    completion.assert_async().await;
}

#[tokio::test]
async fn test_chat_without_api_key_explains_itself() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, None).await;

    let completion = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200);
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let reply: ChatReply = response.json().await.unwrap();
    assert_eq!(reply.reply, MISSING_KEY_REPLY);
    assert_eq!(completion.hits_async().await, 0);
}

#[tokio::test]
async fn test_chat_provider_failure_gives_fallback_reply() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, Some("test-key")).await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(500).body("upstream exploded");
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let reply: ChatReply = response.json().await.unwrap();
    assert_eq!(reply.reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_empty_choices_gives_fallback_reply() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, Some("test-key")).await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "Hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let reply: ChatReply = response.json().await.unwrap();
    assert_eq!(reply.reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_rejects_empty_message() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, Some("test-key")).await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_api_key_is_reported_before_validation() {
    let server = MockServer::start_async().await;
    let app = spawn_with_provider(&server, None).await;

    let response = app
        .client
        .post(app.url("/api/chat"))
        .json(&json!({ "message": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let reply: ChatReply = response.json().await.unwrap();
    assert_eq!(reply.reply, MISSING_KEY_REPLY);
}
