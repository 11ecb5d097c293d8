//! Number classification service
//!
//! Classifies a number by primality, perfection, the Armstrong property and
//! parity, computes its digit-sum, and attaches a fun fact fetched from the
//! Numbers API. One GET endpoint, stateless per request.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use numfacts::config::AppConfig;
use numfacts::facts::NumbersApiClient;
use numfacts::server::{run_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = AppConfig::from_env();
    info!(
        "Fact provider: {} (timeout {:?}, policy {:?})",
        config.numbers_api_url, config.fact_timeout, config.policy
    );

    let facts = NumbersApiClient::new(&config.numbers_api_url, config.fact_timeout)?;
    let state = AppState {
        facts: Arc::new(facts),
        policy: config.policy,
    };

    run_server(state, &config.bind_addr).await
}
