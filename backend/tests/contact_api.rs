use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use backend::{
    config::RateLimitConfig,
    mailer::{Mailer, FAILED, SENT},
    web_server::create_router,
};
use common::ContactMessage;
use http_body_util::BodyExt; // for .collect()
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

mod helpers;
use crate::helpers::{test_config, test_state, test_store, FailingMailer, RecordingMailer};

fn contact() -> ContactMessage {
    ContactMessage {
        name: "Eve".to_string(),
        email: "eve@example.com".to_string(),
        message: "Let's work together".to_string(),
    }
}

fn post_json(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_send_email_delivers_to_the_mailer() {
    // ARRANGE
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_state(
        test_store().await,
        test_config(),
        Some(mailer.clone() as Arc<dyn Mailer>),
    );
    let app = create_router(state);

    // ACT
    let response = app
        .oneshot(post_json("/send-email", &contact()))
        .await
        .unwrap();

    // ASSERT
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, SENT);
    assert_eq!(*mailer.sent.lock().unwrap(), vec![contact()]);
}

#[tokio::test]
async fn test_send_email_reports_delivery_failure() {
    let state = test_state(
        test_store().await,
        test_config(),
        Some(Arc::new(FailingMailer)),
    );
    let app = create_router(state);

    let response = app
        .oneshot(post_json("/send-email", &contact()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, FAILED);
}

#[tokio::test]
async fn test_send_email_without_mail_config_fails() {
    let app = create_router(test_state(test_store().await, test_config(), None));

    let response = app
        .oneshot(post_json("/send-email", &contact()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, FAILED);
}

#[tokio::test]
async fn test_send_email_validates_input() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_state(
        test_store().await,
        test_config(),
        Some(mailer.clone() as Arc<dyn Mailer>),
    );

    let bad_email = json!({ "name": "Eve", "email": "not-an-address", "message": "Hi" });
    let missing_message = json!({ "name": "Eve", "email": "eve@example.com" });

    for payload in [bad_email, missing_message] {
        let response = create_router(state.clone())
            .oneshot(post_json("/send-email", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(test_state(test_store().await, test_config(), None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = create_router(test_state(test_store().await, test_config(), None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(doc["paths"]["/api/education"]["get"].is_object());
    assert!(doc["paths"]["/send-email"]["post"].is_object());
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let app = create_router(test_state(test_store().await, test_config(), None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_paths_serve_the_spa_shell() {
    let mut config = test_config();
    config.web.static_dir = "tests/fixtures/spa".to_string();
    let app = create_router(test_state(test_store().await, config, None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"<div id="root">"#));
}

#[tokio::test]
async fn test_unknown_api_paths_are_json_not_found() {
    let mut config = test_config();
    config.web.static_dir = "tests/fixtures/spa".to_string();
    let app = create_router(test_state(test_store().await, config, None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "No API route for /api/nope");
}

#[tokio::test]
async fn test_contact_form_is_rate_limited_per_client() {
    let mut config = test_config();
    config.rate_limit = Some(RateLimitConfig {
        per_second: 60,
        burst_size: 2,
    });
    let app = helpers::spawn_app_with(config, None).await;

    let mut statuses = Vec::new();
    for _ in 0..4 {
        let response = app
            .client
            .post(app.url("/send-email"))
            .json(&contact())
            .send()
            .await
            .unwrap();
        statuses.push(response.status().as_u16());
    }

    // No mailer is configured, so requests that get through fail with 500.
    assert_eq!(statuses, [500, 500, 429, 429]);

    // Content reads are not throttled.
    let response = app.client.get(app.url("/api/skills")).send().await.unwrap();
    assert_eq!(response.status(), 200);
}
