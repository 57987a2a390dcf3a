use prana::config::{self, Config};
use prana::gateway::Gateway;
use prana::proxy;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let gateway = Gateway::from_config(&config)?;
    let app = proxy::router(gateway);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        gateway = %config.gateway_base_url,
        "prana proxy listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
