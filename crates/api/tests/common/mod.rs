#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clinic_api::config::ServerConfig;
use clinic_api::router::build_app_router;
use clinic_api::state::AppState;
use clinic_core::types::DbId;
use clinic_db::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};
use clinic_db::store::{DoctorStore, MemoryDoctorStore, PgDoctorStore};
use sqlx::PgPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
    }
}

/// Build the full application router (same middleware stack as
/// production) over the given store.
pub fn build_test_app(store: Arc<dyn DoctorStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Build an app over a fresh in-memory store, returning both so tests can
/// seed appointments directly.
pub fn memory_app() -> (Router, Arc<MemoryDoctorStore>) {
    let store = Arc::new(MemoryDoctorStore::new());
    (build_test_app(store.clone()), store)
}

/// Build an app over the PostgreSQL store, as production does.
pub fn pg_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgDoctorStore::new(pool)))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a CORS preflight for `method` on `uri` from `origin`.
pub async fn preflight(
    app: Router,
    uri: &str,
    origin: &str,
    method: Method,
    request_headers: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("origin", origin)
        .header("access-control-request-method", method.as_str())
        .header("access-control-request-headers", request_headers)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a doctor through the API and return its id.
pub async fn create_doctor(app: &Router, name: &str, specialty: &str) -> DbId {
    let response = post_json(
        app.clone(),
        "/doctors/",
        serde_json::json!({"name": name, "specialty": specialty}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every call fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl DoctorStore for UnavailableStore {
    async fn create(&self, _input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_with_appointments(
        &self,
        _id: DbId,
    ) -> Result<Option<DoctorWithAppointments>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list(&self, _filter: &DoctorFilter) -> Result<Vec<Doctor>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(
        &self,
        _id: DbId,
        _input: &UpdateDoctor,
    ) -> Result<Option<Doctor>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
