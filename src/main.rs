mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "bad configuration"))?;
    let app = routes::app().inspect_err(|e| tracing::error!(error = %e, "failed to build router"))?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "qa-widget listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
