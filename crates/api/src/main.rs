use std::net::SocketAddr;
use std::sync::Arc;

use shelf_core::variant::Variant;
use shelf_db::kind::RecordKind;
use shelf_db::models::catalog::Catalog;
use shelf_db::models::website::Websites;
use shelf_db::repositories::RecordStore;
use shelf_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelf_api::config::ServerConfig;
use shelf_api::routes;
use shelf_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_api=debug,shelf_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        variant = %config.variant,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = shelf_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to open database");
    tracing::info!(url = %config.database_url, "Database connection pool created");

    shelf_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    match config.variant {
        Variant::Catalog => serve::<Catalog>(config, pool).await,
        Variant::Websites => serve::<Websites>(config, pool).await,
    }
}

/// Ensure the variant's table exists, then serve until a shutdown signal.
async fn serve<K: RecordKind>(config: ServerConfig, pool: DbPool) {
    let store = RecordStore::<K>::new(pool);
    store
        .ensure_schema()
        .await
        .expect("Failed to create bookmarks table");
    tracing::info!(table = K::TABLE, "Bookmarks table ready");

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    // --- Router ---
    let app = routes::build_app(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
