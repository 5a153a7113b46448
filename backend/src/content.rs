// Generic CRUD routes shared by every content collection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use common::{Content, Document, StatusMessage};

use crate::{auth, error::AppError, extractors::AuthAdmin, web_server::AppState};

/// Routes for one collection, to be nested under `/api/<collection>`.
/// Reads are public; writes go through the auth middleware.
pub fn router<T: Content>(state: AppState) -> Router<AppState> {
    let guard = || middleware::from_fn_with_state(state.clone(), auth::auth_middleware);

    Router::new()
        .route(
            "/",
            get(list::<T>).merge(post(create::<T>).route_layer(guard())),
        )
        .route(
            "/{id}",
            put(update::<T>).delete(remove::<T>).route_layer(guard()),
        )
}

async fn list<T: Content>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document<T>>>, AppError> {
    tracing::debug!("Listing {}", T::COLLECTION);
    let documents = state.store.list::<T>().await?;
    Ok(Json(documents))
}

async fn create<T: Content>(
    State(state): State<AppState>,
    admin: AuthAdmin,
    WithRejection(Json(fields), _): WithRejection<Json<T>, AppError>,
) -> Result<(StatusCode, Json<Document<T>>), AppError> {
    let document = state.store.insert(fields).await?;
    tracing::info!(
        admin = %admin.user_id,
        id = %document.id,
        "Created {}",
        T::LABEL
    );
    Ok((StatusCode::CREATED, Json(document)))
}

async fn update<T: Content>(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    WithRejection(Json(patch), _): WithRejection<Json<T::Patch>, AppError>,
) -> Result<Json<Document<T>>, AppError> {
    let document = state
        .store
        .update::<T>(&id, patch)
        .await?
        .ok_or(AppError::NotFound(T::LABEL))?;

    tracing::info!(admin = %admin.user_id, id = %id, "Updated {}", T::LABEL);
    Ok(Json(document))
}

async fn remove<T: Content>(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    if !state.store.delete::<T>(&id).await? {
        return Err(AppError::NotFound(T::LABEL));
    }

    tracing::info!(admin = %admin.user_id, id = %id, "Deleted {}", T::LABEL);
    Ok(Json(StatusMessage {
        msg: format!("{} removed", T::LABEL),
    }))
}
