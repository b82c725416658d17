use std::sync::Arc;

use product_api::{
    app::product::PgProductRepository,
    create_routes,
    infrastructure::{
        config::{Config, LISTEN_ADDR},
        database::DatabaseManager,
        logger::Logger,
    },
    AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init();

    info!("Starting product server...");

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let database = DatabaseManager::new(&config).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    database.ensure_schema().await?;

    let repository = PgProductRepository::new(database.get_pool().clone());
    let app = create_routes(AppState::new(Arc::new(repository)));

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    let addr = listener.local_addr()?;

    info!("Product server running on http://{}", addr);
    info!("   GET    /products         - List products (?skip=0&take=10)");
    info!("   POST   /products         - Create product");
    info!("   GET    /products/:id     - Get product by ID");
    info!("   PUT    /products/:id     - Update product");
    info!("   DELETE /products/:id     - Delete product");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("Product server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
