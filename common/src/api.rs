use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(default)]
pub struct Credentials {
    #[validate(length(min = 1, code = "required"))]
    pub username: String,
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
pub struct TokenResponse {
    pub token: String,
}

/// Body of the content routes' delete and not-found responses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
pub struct StatusMessage {
    pub msg: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(default)]
pub struct ChatRequest {
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
pub struct ChatReply {
    pub reply: String,
}

/// A contact form submission.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Validate, ToSchema)]
#[cfg_attr(feature = "ts_export", derive(ts_rs::TS), ts(export))]
#[serde(default)]
pub struct ContactMessage {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}
