use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use catalog_api::auth::{generate_jwt, Claims};
use catalog_api::blob::BlobStore;
use catalog_api::store::MemoryStore;
use catalog_api::{app, AppState};

pub const TEST_SECRET: &str = "test-secret";

const BOUNDARY: &str = "----catalog-api-test-boundary";

/// An in-process application over the memory store plus a throwaway upload
/// directory. The TempDir handle keeps the directory alive for the test.
pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

pub fn test_app() -> TestApp {
    let uploads = tempfile::tempdir().expect("tempdir");
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        BlobStore::new(uploads.path()),
        TEST_SECRET.to_string(),
    );

    TestApp {
        router: app(state),
        uploads,
    }
}

/// A valid `Authorization` header value for the test secret.
pub fn bearer_token() -> String {
    bearer_token_for_secret(TEST_SECRET)
}

pub fn bearer_token_for_secret(secret: &str) -> String {
    let claims = Claims::new("tester".to_string(), 1);
    let token = generate_jwt(&claims, secret).expect("token");
    format!("Bearer {}", token)
}

/// Build a multipart body with the given text fields and optional file part,
/// returning (content-type, body).
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(router: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

pub fn authed_multipart(
    method: &str,
    path: &str,
    auth: Option<&str>,
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Request<Body> {
    let (content_type, body) = multipart_body(fields, file);
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", content_type);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body)).expect("request")
}

pub fn authed_delete(path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(path);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).expect("request")
}
