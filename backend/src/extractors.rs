use crate::{error::AppError, web_server::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};

/// The admin a request was authenticated as.
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The middleware is responsible for putting AuthAdmin in extensions.
        // If it's not there the route was mounted without it.
        let admin = parts.extensions.get::<AuthAdmin>().ok_or_else(|| {
            AppError::InternalServerError(
                "AuthAdmin not found in request extensions. Is the auth middleware missing?".into(),
            )
        })?;

        Ok(admin.clone())
    }
}
