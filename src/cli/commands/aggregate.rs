//! Aggregate stage: staged records in, staged category totals out

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::catalog::ProductRecord;
use crate::config::PipelineConfig;
use crate::data_paths::DataPaths;
use crate::report::aggregate_sales;
use crate::staging::{StageStore, KEY_RAW_PRODUCTS, KEY_SALES_SUMMARY};

#[derive(Args, Clone)]
pub struct AggregateArgs {}

pub struct AggregateCommand {
    _args: AggregateArgs,
}

impl AggregateCommand {
    pub fn new(args: AggregateArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, _config: &PipelineConfig, data_paths: &DataPaths) -> Result<()> {
        let store = StageStore::new(data_paths.staging());

        let records: Vec<ProductRecord> = store.get(KEY_RAW_PRODUCTS)?;
        let summaries = aggregate_sales(&records);

        info!(
            "Aggregated {} records into {} categories",
            records.len(),
            summaries.len()
        );

        store.put(KEY_SALES_SUMMARY, &summaries)?;
        Ok(())
    }
}
