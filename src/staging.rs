//! Inter-stage hand-off store
//!
//! When the stages run as separate invocations under an external scheduler,
//! each stage's output travels through the scheduler's key/value channel.
//! `StageStore` is that channel's stand-in on the data directory: values are
//! stored by key as JSON files. The in-process `run` command bypasses it and
//! passes values as plain function returns.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key the fetch stage stores validated product records under
pub const KEY_RAW_PRODUCTS: &str = "raw_products";

/// Key the aggregate stage stores category summaries under
pub const KEY_SALES_SUMMARY: &str = "sales_summary";

pub struct StageStore {
    dir: PathBuf,
}

impl StageStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Store a value under a key, replacing any previous value
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create staging directory: {}", self.dir.display()))?;

        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize staged value for key '{}'", key))?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write staged value: {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to rename staged value: {}", path.display()))?;

        debug!("Staged value under key '{}' at {}", key, path.display());
        Ok(())
    }

    /// Retrieve the value stored under a key
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let path = self.key_path(key);
        if !path.exists() {
            bail!(
                "No staged value for key '{}' at {}; run the upstream stage first",
                key,
                path.display()
            );
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read staged value: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to decode staged value for key '{}'", key))
    }
}
