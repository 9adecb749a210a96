//! CSV persistence for category summaries
//!
//! The file is written to a temp path in the target directory and renamed
//! into place, so a reader never observes a partially written summary.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::WriteError;

use super::aggregate::CategorySummary;

const HEADER: [&str; 3] = ["category", "total_items_sold", "total_revenue"];

/// Write the summary CSV, creating the parent directory if absent and
/// overwriting any existing file at the target path.
pub fn write_summary(summaries: &[CategorySummary], path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");
    if let Err(e) = write_rows(&temp_path, summaries) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!("Saved {} category rows to {}", summaries.len(), path.display());
    Ok(())
}

fn write_rows(temp_path: &Path, summaries: &[CategorySummary]) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_path(temp_path)?;

    writer.write_record(HEADER)?;
    for row in summaries {
        let items = row.total_items_sold.to_string();
        let revenue = row.total_revenue.to_string();
        writer.write_record([row.category.as_str(), items.as_str(), revenue.as_str()])?;
    }
    writer.flush().map_err(|e| WriteError::Io {
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// Parse an existing summary CSV back into rows
pub fn read_summary(path: &Path) -> Result<Vec<CategorySummary>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open summary file: {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let category = record.get(0).context("Summary row missing category")?;
        let items = record
            .get(1)
            .context("Summary row missing total_items_sold")?;
        let revenue = record.get(2).context("Summary row missing total_revenue")?;

        rows.push(CategorySummary {
            category: category.to_string(),
            total_items_sold: items
                .parse()
                .with_context(|| format!("Invalid total_items_sold: {}", items))?,
            total_revenue: revenue
                .parse::<Decimal>()
                .with_context(|| format!("Invalid total_revenue: {}", revenue))?,
        });
    }

    debug!("Read {} summary rows from {}", rows.len(), path.display());
    Ok(rows)
}
