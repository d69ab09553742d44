use std::sync::Arc;

use axum::{routing::get, Json, Router};
use common::types::{Health, Message};
use configs::ApiConfig;
use sea_orm::DatabaseConnection;
use service::specialty::{SeaOrmSpecialtyRepository, SpecialtyConfig, SpecialtyRepository, SpecialtyService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::api_doc;

pub mod specialties;

/// Shared, read-only per-process state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub specialties: Arc<SpecialtyService<dyn SpecialtyRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn SpecialtyRepository>, cfg: SpecialtyConfig) -> Self {
        Self { specialties: Arc::new(SpecialtyService::new(repo, cfg)) }
    }

    /// SeaORM-backed state using the `[api]` options.
    pub fn from_db(db: DatabaseConnection, api: &ApiConfig) -> Self {
        let repo: Arc<dyn SpecialtyRepository> = Arc::new(SeaOrmSpecialtyRepository::new(db));
        Self::new(repo, SpecialtyConfig { empty_list_not_found: api.empty_list_not_found })
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn root() -> Json<Message> {
    Json(Message::new("Hello Specialties API"))
}

fn specialties_router() -> Router<ServerState> {
    Router::new()
        .route("/specialties/", get(specialties::list).post(specialties::create))
        .route("/specialties", get(specialties::list).post(specialties::create))
        .route(
            "/specialties/:id",
            get(specialties::get_by_id)
                .put(specialties::replace)
                .patch(specialties::patch)
                .delete(specialties::soft_delete),
        )
}

/// Build the full application router once; `prefix` is where the resource routes are nested.
pub fn build_router(state: ServerState, cors: CorsLayer, prefix: &str) -> Router {
    let api = if prefix.is_empty() {
        specialties_router()
    } else {
        Router::new().nest(prefix, specialties_router())
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc(prefix)))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
