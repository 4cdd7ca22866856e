#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use db::{ConnectOpts, DbHandle};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use task_manager::config::TaskManagerConfig;
use task_manager::domain::service::Service;
use task_manager::TaskManager;

/// Fresh in-memory SQLite database with migrations applied.
pub async fn create_test_db() -> DatabaseConnection {
    let handle = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .expect("Failed to connect to test database");
    TaskManager::migrate(&handle)
        .await
        .expect("Failed to run migrations");
    handle.sea()
}

pub async fn create_test_module() -> TaskManager {
    TaskManager::init(create_test_db().await, TaskManagerConfig::default())
}

pub async fn create_test_service() -> Arc<Service> {
    create_test_module().await.service()
}

pub async fn create_test_router() -> Router {
    create_test_module().await.register_rest(Router::new())
}

/// Send one request through `router`, returning status and parsed JSON body
/// (`Value::Null` for an empty body, `Value::String` for a non-JSON one such as
/// an axum rejection).
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = router
        .clone()
        .oneshot(req.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}
