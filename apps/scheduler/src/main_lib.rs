use std::sync::Arc;

use bankrank_core::{Fetcher, HttpDocumentSource, JsonSnapshotStore, RankingPipeline};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::notify::LogNotificationSink;
use crate::scheduler::ScrapeScheduler;

pub fn init_tracing() {
    let log_format =
        std::env::var("BANKRANK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the HTTP source, JSON store and pipeline behind a scheduler.
pub fn build_scheduler(config: &Config) -> anyhow::Result<Arc<ScrapeScheduler>> {
    let mapping = config.column_mapping()?;
    tracing::info!(
        "Using column mapping v{} and data directory {}",
        mapping.version,
        config.data_dir.display()
    );

    let source = Arc::new(HttpDocumentSource::new(config.fetch.request_timeout)?);
    let fetcher = Fetcher::new(source, config.fetch.clone());
    let store = Arc::new(JsonSnapshotStore::new(config.data_dir.clone()));
    let pipeline = RankingPipeline::new(fetcher, config.source_url.clone(), mapping, store);

    Ok(Arc::new(ScrapeScheduler::new(
        Arc::new(pipeline),
        config.schedule.clone(),
        Arc::new(LogNotificationSink),
    )))
}
