use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::OriginalUri,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use common::{Achievement, Education, Experience, Project, Skill};
use serde_json::{json, Value};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth, chat,
    completion::CompletionClient,
    config::{AppConfig, RateLimitConfig, WebConfig},
    content, mailer,
    mailer::Mailer,
    openapi::ApiDoc,
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub app_config: Arc<AppConfig>,
    pub completions: CompletionClient,
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(
        store: Store,
        app_config: AppConfig,
        mailer: Option<Arc<dyn Mailer>>,
    ) -> Result<Self, reqwest::Error> {
        let completions = CompletionClient::new(app_config.chat.clone())?;
        Ok(Self {
            store,
            app_config: Arc::new(app_config),
            completions,
            mailer,
        })
    }
}

pub async fn run_server(app_state: AppState) -> anyhow::Result<()> {
    let web = &app_state.app_config.web;
    let addr: SocketAddr = format!("{}:{}", web.addr, web.port).parse()?;

    let app = create_router(app_state);
    tracing::info!("Serving frontend and API at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

pub fn create_router(app_state: AppState) -> Router {
    let config = app_state.app_config.clone();

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Both reach paid or rate-limited third parties.
    let outbound_routes = rate_limited(
        Router::new()
            .route("/api/chat", post(chat::chat))
            .route("/send-email", post(mailer::send_email)),
        config.rate_limit.as_ref(),
    );

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/projects", content::router::<Project>(app_state.clone()))
        .nest("/skills", content::router::<Skill>(app_state.clone()))
        .nest("/experience", content::router::<Experience>(app_state.clone()))
        .nest("/education", content::router::<Education>(app_state.clone()))
        .nest(
            "/achievements",
            content::router::<Achievement>(app_state.clone()),
        )
        .route("/health", get(health))
        // Keeps unknown API paths away from the SPA fallback.
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .merge(outbound_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
        .fallback_service(spa_service(&config.web.static_dir))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(&config.web))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Static files of the built SPA; unknown paths get `index.html` so client-side routes resolve.
fn spa_service(static_dir: &str) -> ServeDir<ServeFile> {
    let index = Path::new(static_dir).join("index.html");
    ServeDir::new(static_dir).fallback(ServeFile::new(index))
}

fn cors_layer(web: &WebConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if web.cors_origin == "*" {
        return layer.allow_origin(Any);
    }
    match web.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(
                "Invalid cors_origin {:?} ({}); cross-origin requests will be refused",
                web.cors_origin,
                e
            );
            layer
        }
    }
}

fn rate_limited(router: Router<AppState>, limit: Option<&RateLimitConfig>) -> Router<AppState> {
    let Some(limit) = limit else {
        return router;
    };

    let governor = GovernorConfigBuilder::default()
        .per_second(limit.per_second)
        .burst_size(limit.burst_size)
        .finish();

    match governor {
        Some(config) => router.layer(GovernorLayer {
            config: Arc::new(config),
        }),
        None => {
            tracing::warn!("Invalid rate limit {:?}; requests will not be limited", limit);
            router
        }
    }
}

/// ## Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "meta",
    responses((status = 200, description = "Server is up"))
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    tracing::debug!("No API route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("No API route for {}", uri.path()) })),
    )
}
