//! Tally Web Server
//!
//! Axum-based JSON API for the Tally personal finance tracker. The route
//! surface mirrors the classic form-driven app: dashboard and performance
//! views, add/update/delete for incomes and expenses.
//!
//! Everything is backed by the in-memory `RecordStore`; there is no
//! persistence and no authentication. The server is meant to run locally for
//! a single user, optionally serving a static UI bundle.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info};

use tally_core::store::RecordStore;

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub store: RecordStore,
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(store: RecordStore, static_dir: Option<&str>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { store });

    let mut app = Router::new()
        // Aggregate views
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/performance", get(handlers::get_performance))
        // Incomes
        .route(
            "/add-income",
            get(handlers::income_form).post(handlers::create_income),
        )
        .route("/update-income/:id", post(handlers::update_income))
        .route("/delete-income/:id", delete(handlers::delete_income))
        // Expenses
        .route(
            "/add-expense",
            get(handlers::expense_form).post(handlers::create_expense),
        )
        .route("/update-expense/:id", post(handlers::update_expense))
        .route("/delete-expense/:id", delete(handlers::delete_expense));

    // The landing page gives way to a static UI bundle when one is provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    } else {
        app = app.route("/", get(handlers::landing));
    }

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    app.with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(
    store: RecordStore,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(store, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Internal error: the client gets a generic message, the full error is
    /// kept for logging.
    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "An internal error occurred".to_string(),
            internal: Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<tally_core::Error> for AppError {
    fn from(err: tally_core::Error) -> Self {
        match err {
            tally_core::Error::NotFound(what) => Self::not_found(&format!("{} not found", what)),
            tally_core::Error::InvalidData(msg) => Self::bad_request(&msg),
            other => Self::internal(other.into()),
        }
    }
}
