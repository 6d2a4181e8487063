pub mod auth;
pub mod blob;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use blob::BlobStore;
use store::ProductStore;

/// Everything a request handler needs, injected at construction instead of
/// living in module-level singletons. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub blobs: BlobStore,
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, blobs: BlobStore, jwt_secret: String) -> Self {
        Self {
            store,
            blobs,
            jwt_secret,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(product_routes(state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn product_routes(state: AppState) -> Router {
    use handlers::products;

    let require_auth = from_fn_with_state(state.clone(), middleware::bearer_auth_middleware);

    // GETs are public; everything that writes sits behind the auth check.
    Router::new()
        .route(
            "/products",
            get(products::list).merge(post(products::create).route_layer(require_auth.clone())),
        )
        .route(
            "/products/:id",
            get(products::get).merge(
                put(products::update)
                    .delete(products::delete)
                    .route_layer(require_auth),
            ),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "name": "catalog-api", "version": env!("CARGO_PKG_VERSION") }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
