#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use shelf_core::variant::Variant;
use shelf_db::kind::RecordKind;
use shelf_db::repositories::RecordStore;
use tempfile::TempDir;
use tower::ServiceExt;

use shelf_api::config::ServerConfig;
use shelf_api::routes;
use shelf_api::state::AppState;

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "shelf-test-boundary";

/// A running test application plus the resources it owns.
///
/// The temp directory holds the upload and public directories and is
/// removed when the harness is dropped.
pub struct TestApp<K: RecordKind> {
    pub app: Router,
    pub store: RecordStore<K>,
    pub upload_dir: PathBuf,
    pub public_dir: PathBuf,
    _root: TempDir,
}

/// Build a test `ServerConfig` rooted in `root`.
pub fn test_config(root: &TempDir, variant: Variant) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        variant,
        upload_dir: root.path().join("uploads"),
        public_dir: root.path().join("public"),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application over a fresh in-memory database.
pub async fn build_test_app<K: RecordKind>() -> TestApp<K> {
    let root = tempfile::tempdir().unwrap();
    let config = test_config(&root, K::VARIANT);

    let pool = shelf_db::create_memory_pool().await.unwrap();
    let store = RecordStore::<K>::new(pool);
    store.ensure_schema().await.unwrap();

    let upload_dir = config.upload_dir.clone();
    let public_dir = config.public_dir.clone();

    let app = routes::build_app(AppState {
        store: store.clone(),
        config: Arc::new(config),
    });

    TestApp {
        app,
        store,
        upload_dir,
        public_dir,
        _root: root,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST URL-encoded `fields` to `uri`.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// POST a multipart body built by [`multipart_body`] to `uri`.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, file)))
        .unwrap();
    send(app, request).await
}

/// Encode text fields plus an optional `(field_name, file_name, bytes)` part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, file_name, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
