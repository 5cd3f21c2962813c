// src/web.rs

use crate::catalog::{Catalog, PageRequest, PageResult};
use crate::config::ServerConfig;
use crate::constants::ASSETS_ROUTE;
use crate::envelope::Envelope;
use crate::errors::{ApiError, Error, Result};
use crate::fixtures::{self, Banner, LoginData, UserProfile};
use crate::id;
use crate::random::{RandomSource, ThreadRandom};
use crate::signal::shutdown_signal;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, Uri},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// --- Shared State ---
/// Everything the handlers read. Immutable after startup.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub public_url: String,
    rng: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(config: &ServerConfig, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            catalog: Catalog::new(config.product_image_url(), rng.clone()),
            public_url: config.public_url.clone(),
            rng,
        }
    }
}

// --- Response Structs ---
#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u128,
}

// --- Server Startup ---
/// Router with the default configuration and thread-local randomness.
pub fn create_router() -> Router {
    create_router_with_config(&ServerConfig::default())
}

pub fn create_router_with_config(config: &ServerConfig) -> Router {
    create_router_with_state(config, AppState::new(config, Arc::new(ThreadRandom)))
}

/// Router over an explicit state, e.g. one built around a seeded random source.
pub fn create_router_with_state(config: &ServerConfig, state: AppState) -> Router {
    // Reflect the caller's origin, like `origin: true` in most JS servers.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler).fallback(method_not_allowed_handler))
        .route(
            "/get-banners",
            post(banners_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/get-products",
            post(products_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/login",
            post(login_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/logout",
            post(logout_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/profile",
            get(profile_handler)
                .post(profile_handler)
                .fallback(method_not_allowed_handler),
        )
        .nest_service(ASSETS_ROUTE, ServeDir::new(&config.assets_dir))
        .fallback(not_found_handler)
        .with_state(Arc::new(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: ServerConfig) -> Result<()> {
    if !config.assets_dir.is_dir() {
        log::warn!(
            "Assets directory '{}' does not exist; {}/ will answer 404",
            config.assets_dir.display(),
            ASSETS_ROUTE
        );
    }

    let app = create_router_with_config(&config);
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    log::info!("Listening on {}", addr);
    println!("Mock server running at {}", config.public_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    log::info!("Server stopped.");
    Ok(())
}

// --- Handlers ---

async fn health_handler() -> Envelope<HealthStatus> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    Envelope::success(HealthStatus {
        status: "ok",
        timestamp,
    })
}

async fn banners_handler(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Envelope<Vec<Banner>>, ApiError> {
    read_json_body(body)?;
    Ok(Envelope::success(fixtures::banners(&state.public_url)))
}

async fn products_handler(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Envelope<PageResult>, ApiError> {
    let body = read_json_body(body)?;
    let request = PageRequest::from_json(body.as_ref());
    Ok(Envelope::success(state.catalog.page(&request)))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Envelope<LoginData>, ApiError> {
    let body = read_json_body(body)?;
    let username = body
        .as_ref()
        .and_then(|b| b.get("username"))
        .and_then(Value::as_str);
    let password = body
        .as_ref()
        .and_then(|b| b.get("password"))
        .and_then(Value::as_str);

    if !fixtures::credentials_match(username, password) {
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!("Mock login succeeded");
    Ok(Envelope::success(LoginData {
        token: id::generate(state.rng.as_ref()),
        user: fixtures::user_profile(&state.public_url),
    }))
}

async fn logout_handler(
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Envelope<()>, ApiError> {
    read_json_body(body)?;
    Ok(Envelope::success(()))
}

async fn profile_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> std::result::Result<Envelope<UserProfile>, ApiError> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().is_empty());
    if !authorized {
        return Err(ApiError::Unauthorized);
    }
    Ok(Envelope::success(fixtures::user_profile(&state.public_url)))
}

async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// Maps extractor rejections (such as an oversized body) onto the error envelope.
fn read_json_body(
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Option<Value>, ApiError> {
    let body = body.map_err(ApiError::UnreadableBody)?;
    parse_json_body(&body)
}

/// An empty or whitespace-only body is treated as absent.
fn parse_json_body(body: &[u8]) -> std::result::Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(ApiError::MalformedBody)
}
