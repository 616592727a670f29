//! HTTP gateway exposing the bank API

pub mod api;
pub mod error;
pub mod config;

use std::sync::Arc;

use axum::{routing::get, Router};
use bank_service::BankService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::bank::{add_bank, delete_bank, get_bank, get_banks, update_bank};
use crate::api::health::{health, not_found};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::bank::get_banks,
        api::bank::get_bank,
        api::bank::add_bank,
        api::bank::update_bank,
        api::bank::delete_bank,
    ),
    components(
        schemas(common::model::bank::Bank)
    ),
    tags(
        (name = "bank", description = "Bank management endpoints")
    ),
    info(
        title = "Bank API",
        version = "1.0.0",
        description = "CRUD API for bank records backed by a pluggable data source"
    )
)]
pub struct ApiDoc;

/// App state shared across handlers
pub struct AppState {
    /// Bank service
    pub bank_service: Arc<BankService>,
}

impl AppState {
    /// Create app state around a bank service
    pub fn new(bank_service: BankService) -> Self {
        Self {
            bank_service: Arc::new(bank_service),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    router_with_trace_level(state, Level::INFO)
}

/// Build the application router, tracing requests at the given level
pub fn router_with_trace_level(state: Arc<AppState>, log_level: Level) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/banks", get(get_banks).post(add_bank).patch(update_bank))
        .route("/api/banks/:account_number", get(get_bank).delete(delete_bank))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        )
        .with_state(state)
}
