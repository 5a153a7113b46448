// --- File: backend/src/lib.rs ---

// Library half of the backend; the `portfolio` and `seed` binaries and the
// integration tests all build on these modules.
pub mod auth;
pub mod chat;
pub mod completion;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod extractors;
pub mod mailer;
pub mod openapi;
pub mod seed;
pub mod store;
pub mod web_server;
