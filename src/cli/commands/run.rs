//! Whole-pipeline run: fetch, aggregate, write in one process
//!
//! Stage outputs are passed directly as function returns instead of going
//! through the staging store. The run fails at the first stage error and
//! leaves any previous summary file untouched.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::catalog::{validate_products, CatalogClient};
use crate::config::PipelineConfig;
use crate::data_paths::DataPaths;
use crate::report::{aggregate_sales, write_summary};

/// Logical workflow identifier the pipeline is registered under
pub const WORKFLOW_ID: &str = "products-sales-report";

#[derive(Args, Clone)]
pub struct RunArgs {}

pub struct RunCommand {
    _args: RunArgs,
}

impl RunCommand {
    pub fn new(args: RunArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &PipelineConfig, _data_paths: &DataPaths) -> Result<()> {
        info!(workflow = WORKFLOW_ID, "Starting pipeline run");

        let client = CatalogClient::new(config)?;
        let raw = client.fetch_products().await?;
        let records = validate_products(raw)?;
        info!("Fetched {} product records", records.len());

        let summaries = aggregate_sales(&records);
        info!(
            "Aggregated {} records into {} categories",
            records.len(),
            summaries.len()
        );

        write_summary(&summaries, &config.summary_path())?;

        info!(workflow = WORKFLOW_ID, "Pipeline run complete");
        Ok(())
    }
}
