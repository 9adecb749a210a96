//! CLI for the sales report pipeline
//!
//! Each pipeline stage is an independent subcommand so an external scheduler
//! can invoke them one at a time, with the staging store carrying values
//! between invocations. `run` executes the whole pipeline in process.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

pub mod commands;

use crate::config::PipelineConfig;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{self, LogMode, LoggingConfig};

use commands::aggregate::{AggregateArgs, AggregateCommand};
use commands::fetch::{FetchArgs, FetchCommand};
use commands::run::{RunArgs, RunCommand};
use commands::version::{VersionArgs, VersionCommand};
use commands::write::{WriteArgs, WriteCommand};

#[derive(Parser)]
#[command(name = "salespipe")]
#[command(version)]
#[command(about = "Product catalog sales report pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Override the product catalog endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<Url>,

    /// Override the report output directory
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log to file only, keep the console quiet (for scheduler-driven runs)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the product catalog and stage the validated records
    Fetch(FetchArgs),

    /// Aggregate staged records into per-category sales totals
    Aggregate(AggregateArgs),

    /// Write the staged category totals to the summary CSV
    Write(WriteArgs),

    /// Run fetch, aggregate and write in sequence, in process
    Run(RunArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        if !matches!(self.command, Commands::Version(_)) {
            let mode = if self.quiet {
                LogMode::FileOnly
            } else {
                LogMode::ConsoleAndFile
            };
            logging::init_logging(LoggingConfig::new(
                mode,
                data_paths.clone(),
                self.verbose > 0,
            ))?;
        }

        let mut config = PipelineConfig::from_env(&data_paths)?;
        config.apply_overrides(self.endpoint, self.output_dir);

        match self.command {
            Commands::Fetch(args) => FetchCommand::new(args).execute(&config, &data_paths).await,
            Commands::Aggregate(args) => {
                AggregateCommand::new(args).execute(&config, &data_paths).await
            }
            Commands::Write(args) => WriteCommand::new(args).execute(&config, &data_paths).await,
            Commands::Run(args) => RunCommand::new(args).execute(&config, &data_paths).await,
            Commands::Version(args) => VersionCommand::new(args).execute().await,
        }
    }
}
