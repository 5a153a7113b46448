// backend/tests/helpers.rs
#![allow(dead_code)]

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use backend::{
    config::{
        AppConfig, AuthConfig, ChatConfig, DatabaseConfig, JwtConfig, MailConfig, WebConfig,
    },
    db,
    mailer::{MailError, Mailer},
    store::Store,
    web_server::{create_router, AppState},
};
use common::{ContactMessage, Credentials, TokenResponse};
use reqwest::StatusCode;
use tokio::net::TcpListener;

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "password123";

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub store: Store,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Configuration with every outbound integration switched off.
pub fn test_config() -> AppConfig {
    AppConfig {
        web: WebConfig {
            addr: "127.0.0.1".to_string(),
            port: 0,
            cors_origin: "*".to_string(),
            static_dir: "tests/no-such-dir".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expires_minutes: 60,
        },
        auth: AuthConfig {
            allow_registration: true,
        },
        chat: ChatConfig::default(),
        mail: MailConfig::default(),
        rate_limit: None,
    }
}

/// A fresh in-memory store. One connection, so every query sees the same database.
pub async fn test_store() -> Store {
    let db_pool = db::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("Failed to create in-memory database pool.");

    db::migrate(&db_pool)
        .await
        .expect("Failed to run migrations on test database.");

    Store::new(db_pool)
}

pub fn test_state(
    store: Store,
    config: AppConfig,
    mailer: Option<Arc<dyn Mailer>>,
) -> AppState {
    AppState::new(store, config, mailer).expect("Failed to build app state")
}

/// Spawn a test server with the default test configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(), None).await
}

/// Spawn a test server and return its address, a reqwest client and the backing store.
pub async fn spawn_app_with(config: AppConfig, mailer: Option<Arc<dyn Mailer>>) -> TestApp {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = test_store().await;
    let app = create_router(test_state(store.clone(), config, mailer));

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store,
    }
}

pub fn test_credentials() -> Credentials {
    Credentials {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Registers the test admin, logs in, and returns the bearer token.
pub async fn get_auth_token(app: &TestApp) -> String {
    let credentials = test_credentials();

    let res = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to register admin");
    assert_eq!(res.status(), StatusCode::OK, "Registration failed");

    let response = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to login admin");
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Login request did not return 200 OK"
    );

    let login: TokenResponse = response
        .json()
        .await
        .expect("Failed to parse login response");
    login.token
}

/// Keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Fails like an unreachable SMTP relay would.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}
