use anyhow::Result;
use std::sync::Arc;
use superapp::config::config_loader;
use superapp::infrastructure::axum_http::http_serve;
use superapp::infrastructure::memory::{memory_connection, plan_catalog::StaticPlanCatalog};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let store = memory_connection::establish_connection(Arc::new(StaticPlanCatalog)).await?;
    info!("Memory store has been seeded");

    http_serve::start(Arc::new(dotenvy_env), store).await?;

    Ok(())
}
