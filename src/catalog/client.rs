//! HTTP client for the product catalog endpoint

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::PipelineConfig;
use crate::errors::FetchError;

use super::types::RawProduct;

/// Client issuing the single catalog GET request.
///
/// No retries here; retry policy belongs to the orchestrator that
/// schedules the stage.
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(config: &PipelineConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the catalog: one GET, expecting a 2xx response whose body is a
    /// JSON array of product objects.
    pub async fn fetch_products(&self) -> Result<Vec<RawProduct>, FetchError> {
        info!("Fetching product catalog from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let products: Vec<RawProduct> = serde_json::from_str(&body)?;

        debug!("Decoded {} product records", products.len());
        Ok(products)
    }
}
