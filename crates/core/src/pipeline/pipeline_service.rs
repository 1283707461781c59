use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use super::pipeline_model::PipelineOutcome;
use crate::changes::detect_changes;
use crate::errors::Result;
use crate::extract::{extractor_for, ColumnMapping, DocumentFormat};
use crate::fetch::Fetcher;
use crate::rankings::Snapshot;
use crate::storage::SnapshotStore;

/// Produces a ranked snapshot: fetch, extract, diff against the snapshot
/// that was latest before this run, then persist the change report and the
/// snapshot.
///
/// Holds no state between runs; every call to [`run`](Self::run) is
/// independent. Callers are responsible for not running two at once.
pub struct RankingPipeline {
    fetcher: Fetcher,
    source_url: String,
    mapping: ColumnMapping,
    store: Arc<dyn SnapshotStore>,
}

impl RankingPipeline {
    pub fn new(
        fetcher: Fetcher,
        source_url: impl Into<String>,
        mapping: ColumnMapping,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            fetcher,
            source_url: source_url.into(),
            mapping,
            store,
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Run once.
    ///
    /// Fetch and storage failures abort the run before anything newer is
    /// visible as latest, so a failed run never loses its change report.
    /// An empty extraction still produces (and persists) an empty snapshot.
    pub async fn run(&self) -> Result<PipelineOutcome> {
        info!("Starting bank ranking scrape of {}", self.source_url);

        let document = self.fetcher.fetch(&self.source_url).await?;
        let format = DocumentFormat::detect(document.content_type.as_deref(), &document.body);
        let scraped_at = Utc::now();
        let banks = extractor_for(format, self.mapping.clone()).extract(&document.body, scraped_at);

        if banks.is_empty() {
            warn!(
                "No ranked banks extracted from {} document at {}",
                format.as_str(),
                self.source_url
            );
        } else {
            info!("Extracted {} banks from {} document", banks.len(), format.as_str());
        }

        let snapshot = Snapshot::new(self.source_url.as_str(), scraped_at, banks);

        // Diff against the previous run before anything is written.
        let previous = self.store.read_latest().await?;
        let changes = match &previous {
            Some(prev) => detect_changes(&prev.banks, &snapshot.banks),
            None => {
                info!("No previous snapshot found, skipping change detection");
                Vec::new()
            }
        };

        // Report first: if it cannot be written, latest stays on the
        // previous snapshot and the next run reproduces these changes.
        if !changes.is_empty() {
            info!("Detected {} changes:", changes.len());
            for change in &changes {
                info!("- {}", change);
            }
            self.store
                .write_changes(snapshot.snapshot_date(), &changes)
                .await?;
        }
        self.store.write(&snapshot).await?;

        info!(
            "Scrape completed successfully. Found {} banks.",
            snapshot.bank_count
        );

        Ok(PipelineOutcome {
            snapshot,
            changes,
            previous_found: previous.is_some(),
        })
    }
}
