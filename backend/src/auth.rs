use axum::{extract::State, Json};
use bcrypt::{hash, verify, DEFAULT_COST};
use common::{Credentials, TokenResponse};
use serde::{Deserialize, Serialize};

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::{
    extract::WithRejection,
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::extractors::AuthAdmin;
use crate::web_server::AppState;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String, // Admin id
    pub exp: usize,      // Expiration time
}

/// Signs a token for `user_id` that expires after the configured lifetime.
pub fn issue_token(user_id: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let exp = (Utc::now() + Duration::minutes(jwt_config.expires_minutes)).timestamp() as usize;
    let claims = Claims {
        user_id: user_id.to_string(),
        exp,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_ref()),
    )?)
}

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

// --- API Handlers ---

/// ## Register a new admin
/// Meant for first-time setup; disable with `auth.allow_registration = false`.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Admin created", body = TokenResponse),
        (status = 400, description = "Admin already exists or invalid input"),
        (status = 403, description = "Registration is disabled"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Credentials>, AppError>,
) -> Result<Json<TokenResponse>, AppError> {
    if !state.app_config.auth.allow_registration {
        return Err(AppError::Forbidden("Registration is disabled".to_string()));
    }
    payload.validate()?;

    tracing::info!("Registering admin: {}", &payload.username);
    if state.store.find_admin(&payload.username).await?.is_some() {
        return Err(AppError::BadCredentials("Admin already exists"));
    }

    let password_hash = hash_password(&payload.password)?;
    let admin = state
        .store
        .insert_admin(&payload.username, &password_hash)
        .await?;

    let token = issue_token(&admin.id, &state.app_config.jwt)?;
    Ok(Json(TokenResponse { token }))
}

/// ## Log in as admin
/// Verifies the credentials and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Credentials>, AppError>,
) -> Result<Json<TokenResponse>, AppError> {
    tracing::info!("Admin login attempt: {}", &payload.username);
    let admin = state
        .store
        .find_admin(&payload.username)
        .await?
        .ok_or(AppError::BadCredentials(INVALID_CREDENTIALS))?;

    if !verify(&payload.password, &admin.password_hash)? {
        tracing::warn!("Wrong password for admin: {}", &payload.username);
        return Err(AppError::BadCredentials(INVALID_CREDENTIALS));
    }

    let token = issue_token(&admin.id, &state.app_config.jwt)?;
    Ok(Json(TokenResponse { token }))
}

// --- Middleware for JWT Authentication ---

/// Rejects requests without a valid bearer token and stores the decoded admin
/// in the request extensions for [`AuthAdmin`].
pub async fn auth_middleware(
    State(state): State<AppState>,
    auth_header: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Missing, non-Bearer and undecodable headers are all just "no token".
    let TypedHeader(authorization) = auth_header.map_err(|e| {
        tracing::warn!("Rejected authorization header: {}", e);
        AppError::Unauthorized
    })?;
    let token = authorization.token().to_owned();

    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(state.app_config.jwt.secret.as_ref()),
        &validation,
    )
    .map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthAdmin {
        user_id: token_data.claims.user_id,
    });

    Ok(next.run(request).await)
}
