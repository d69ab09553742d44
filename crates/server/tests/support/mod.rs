#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use configs::{ApiConfig, DatabaseConfig};
use migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{build_router, ServerState};

/// Router over a fresh migrated in-memory store.
pub async fn test_app_with(api: ApiConfig) -> Router {
    let db = models::db::connect_with_config(&DatabaseConfig::sqlite_memory())
        .await
        .expect("connect sqlite");
    migration::Migrator::up(&db, None).await.expect("migrate up");
    let state = ServerState::from_db(db, &api);
    build_router(state, CorsLayer::very_permissive(), &api.prefix)
}

pub async fn test_app() -> Router {
    test_app_with(ApiConfig::default()).await
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    split(resp).await
}

async fn split(resp: Response) -> (u16, Value) {
    let status = resp.status().as_u16();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, json)
}
