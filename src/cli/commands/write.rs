//! Write stage: staged category totals out to the summary CSV

use anyhow::Result;
use clap::Args;

use crate::config::PipelineConfig;
use crate::data_paths::DataPaths;
use crate::report::{write_summary, CategorySummary};
use crate::staging::{StageStore, KEY_SALES_SUMMARY};

#[derive(Args, Clone)]
pub struct WriteArgs {}

pub struct WriteCommand {
    _args: WriteArgs,
}

impl WriteCommand {
    pub fn new(args: WriteArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &PipelineConfig, data_paths: &DataPaths) -> Result<()> {
        let store = StageStore::new(data_paths.staging());

        let summaries: Vec<CategorySummary> = store.get(KEY_SALES_SUMMARY)?;
        write_summary(&summaries, &config.summary_path())?;

        Ok(())
    }
}
