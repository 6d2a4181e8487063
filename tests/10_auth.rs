mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app.router, common::get("/health")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn create_without_token_is_unauthorized_with_no_side_effects() -> Result<()> {
    let app = common::test_app();

    let request = common::authed_multipart(
        "POST",
        "/products",
        None,
        &[("name", "Pen")],
        Some(("pen.jpg", b"jpeg bytes")),
    );
    let (status, body) = common::send(&app.router, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));

    // Nothing was stored and nothing was written to the upload dir
    let (_, products) = common::send(&app.router, common::get("/products")).await?;
    assert_eq!(products, json!([]));
    assert_eq!(std::fs::read_dir(app.uploads.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn update_and_delete_without_token_are_unauthorized() -> Result<()> {
    let app = common::test_app();
    let id = uuid::Uuid::new_v4();

    let update = common::authed_multipart(
        "PUT",
        &format!("/products/{}", id),
        None,
        &[("name", "Pen")],
        None,
    );
    let (status, body) = common::send(&app.router, update).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));

    let delete = common::authed_delete(&format!("/products/{}", id), None);
    let (status, _) = common::send(&app.router, delete).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_secret_is_unauthorized() -> Result<()> {
    let app = common::test_app();
    let foreign = common::bearer_token_for_secret("some-other-secret");

    let request = common::authed_multipart(
        "POST",
        "/products",
        Some(&foreign),
        &[("name", "Pen")],
        Some(("pen.jpg", b"jpeg bytes")),
    );
    let (status, body) = common::send(&app.router, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
    Ok(())
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() -> Result<()> {
    let app = common::test_app();

    let request = common::authed_multipart(
        "POST",
        "/products",
        Some("Basic dXNlcjpwYXNz"),
        &[("name", "Pen")],
        Some(("pen.jpg", b"jpeg bytes")),
    );
    let (status, _) = common::send(&app.router, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn valid_token_passes_the_auth_check() -> Result<()> {
    let app = common::test_app();
    let token = common::bearer_token();

    let request = common::authed_multipart(
        "POST",
        "/products",
        Some(&token),
        &[("name", "Pen")],
        Some(("pen.jpg", b"jpeg bytes")),
    );
    let (status, body) = common::send(&app.router, request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Product saved successfully" }));
    Ok(())
}

#[tokio::test]
async fn public_reads_require_no_token() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app.router, common::get("/products")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}
