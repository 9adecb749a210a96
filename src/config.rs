//! Pipeline configuration: catalog endpoint, output location, request timeout
//!
//! Resolution order is defaults, then environment variables, then CLI flags.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::data_paths::DataPaths;

/// Default product catalog endpoint
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Fixed output filename, written into the output directory
pub const SUMMARY_FILENAME: &str = "sales_summary.csv";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Product catalog endpoint, expected to serve a JSON array of products
    pub endpoint: Url,
    /// Directory the summary CSV is written to
    pub output_dir: PathBuf,
    /// Timeout for the single catalog GET request
    pub request_timeout: Duration,
}

impl PipelineConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults rooted in the data directory.
    pub fn from_env(data_paths: &DataPaths) -> Result<Self> {
        let endpoint = match std::env::var("SALESPIPE_ENDPOINT") {
            Ok(raw) => Url::parse(&raw)
                .with_context(|| format!("Invalid SALESPIPE_ENDPOINT value: {}", raw))?,
            Err(_) => Url::parse(DEFAULT_ENDPOINT).context("Invalid default endpoint URL")?,
        };

        let output_dir = std::env::var("SALESPIPE_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_paths.reports());

        let timeout_secs = match std::env::var("SALESPIPE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid SALESPIPE_TIMEOUT_SECS value: {}", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint,
            output_dir,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Apply CLI flag overrides on top of env/default values
    pub fn apply_overrides(&mut self, endpoint: Option<Url>, output_dir: Option<PathBuf>) {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
    }

    /// Full path of the summary CSV
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILENAME)
    }
}
