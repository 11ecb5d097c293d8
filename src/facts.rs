//! Fun fact lookup
//!
//! The one side-effecting collaborator in the pipeline. The [`FactLookup`]
//! trait is the seam the engine and tests depend on; [`NumbersApiClient`]
//! is the production implementation backed by numbersapi.com.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Substituted when the normalized input is non-integral and the provider is
/// never contacted.
pub const INTEGER_FACTS_ONLY: &str = "Fun facts are available for integers only.";

/// Provider of a human-readable fact for a non-negative integer.
///
/// Implementations must always return a usable string: either real fact text
/// or a degraded message naming the failure. No error crosses this boundary.
#[async_trait]
pub trait FactLookup: Send + Sync {
    async fn lookup(&self, n: u64) -> String;
}

/// Numbers API client with a bounded request timeout so an unreachable
/// provider cannot stall a request indefinitely.
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build fact HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, n: u64) -> Result<String> {
        let url = format!("{}/{}/math?json", self.base_url, n);
        debug!("Fetching fun fact: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach fact provider")?
            .error_for_status()
            .context("Fact provider returned an error status")?;

        let payload: Value = response
            .json()
            .await
            .context("Failed to parse fact payload")?;

        payload
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Fact payload has no 'text' field"))
    }
}

#[async_trait]
impl FactLookup for NumbersApiClient {
    async fn lookup(&self, n: u64) -> String {
        match self.fetch(n).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Fun fact lookup failed for {}: {:#}", n, e);
                format!("Could not retrieve fun fact: {:#}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_provider_degrades() {
        // Discard port on loopback; refused without touching the network.
        let client =
            NumbersApiClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let fact = client.lookup(42).await;
        assert!(
            fact.starts_with("Could not retrieve fun fact:"),
            "unexpected: {}",
            fact
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            NumbersApiClient::new("http://numbersapi.com/", Duration::from_secs(3)).unwrap();
        assert_eq!(client.base_url, "http://numbersapi.com");
    }
}
