use jatra::sdk::config::RelayConfig;
use jatra::sdk::fare::{fare_schema, FareError, GeminiOracle};
use jatra::sdk::relay::{router, AppState};
use jatra::sdk::util::log::init_logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(FareError::Misconfigured) => {
            log::error!("GEMINI_API_KEY is not set; refusing to start");
            anyhow::bail!("GEMINI_API_KEY environment variable is required");
        }
        Err(e) => return Err(e.into()),
    };

    // Parse the response-schema constant now so a broken literal fails at
    // startup, not on the first request.
    let _ = fare_schema();

    let oracle = GeminiOracle::new(config.api_key.clone(), config.upstream_timeout)?
        .with_model(&config.model);
    let app = router(AppState::new(Arc::new(oracle)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!(
        "Fare relay listening on {} (model: {})",
        config.bind_addr,
        config.model
    );
    axum::serve(listener, app).await?;
    Ok(())
}
