//! Fetch stage: retrieve the catalog, validate records, stage them

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::catalog::{validate_products, CatalogClient};
use crate::config::PipelineConfig;
use crate::data_paths::DataPaths;
use crate::staging::{StageStore, KEY_RAW_PRODUCTS};

#[derive(Args, Clone)]
pub struct FetchArgs {}

pub struct FetchCommand {
    _args: FetchArgs,
}

impl FetchCommand {
    pub fn new(args: FetchArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &PipelineConfig, data_paths: &DataPaths) -> Result<()> {
        let client = CatalogClient::new(config)?;
        let raw = client.fetch_products().await?;
        let records = validate_products(raw)?;

        info!("Fetched {} product records", records.len());

        let store = StageStore::new(data_paths.staging());
        store.put(KEY_RAW_PRODUCTS, &records)?;

        Ok(())
    }
}
