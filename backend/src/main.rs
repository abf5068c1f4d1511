use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ecommerce_api_backend::{create_router, initialize_backend, ROUTES};

/// Database used when DATABASE_URL is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:ecommerce.db";

/// Bind address used when BIND_ADDR is not set
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let app_state = initialize_backend(&database_url).await?;
    let app = create_router(app_state);

    info!("Available routes:");
    for route in ROUTES {
        info!("  {}", route);
    }

    // Start the server
    let addr: SocketAddr = bind_addr.parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
