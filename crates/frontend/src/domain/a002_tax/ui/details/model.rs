use anyhow::Context;
use contracts::domain::a001_catalog_item::{load_catalog, partition_items, PartitionedItems};
use contracts::domain::a002_tax::TaxSubmission;

/// Receiver of successfully validated tax submissions
pub trait SubmissionSink {
    fn emit(&self, submission: &TaxSubmission) -> anyhow::Result<()>;
}

/// Writes the submission to the browser console as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSubmissionSink;

impl SubmissionSink for ConsoleSubmissionSink {
    fn emit(&self, submission: &TaxSubmission) -> anyhow::Result<()> {
        let json =
            serde_json::to_string(submission).context("Failed to serialize tax submission")?;
        log::info!("{}", json);
        Ok(())
    }
}

/// Load the built-in catalog and group it by category
pub fn fetch_catalog() -> anyhow::Result<PartitionedItems> {
    let items = load_catalog().context("Failed to load item catalog")?;
    let parts = partition_items(&items);
    log::debug!(
        "Catalog loaded: {} items, {} categories, {} uncategorized",
        parts.len(),
        parts.categories.len(),
        parts.uncategorized.len()
    );
    Ok(parts)
}
