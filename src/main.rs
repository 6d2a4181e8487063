use std::sync::Arc;

use catalog_api::blob::BlobStore;
use catalog_api::store::{MemoryStore, PgProductStore, ProductStore};
use catalog_api::{app, config, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, CATALOG_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting catalog-api in {:?} mode", config.environment);

    let store: Arc<dyn ProductStore> = match &config.database.url {
        Some(url) => {
            let store = PgProductStore::connect(url, config.database.max_connections)
                .await
                .unwrap_or_else(|e| panic!("failed to connect to product database: {}", e));
            tracing::info!("connected to product database");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; products will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(
        store,
        BlobStore::new(&config.storage.upload_dir),
        config.security.jwt_secret.clone(),
    );

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 catalog-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
