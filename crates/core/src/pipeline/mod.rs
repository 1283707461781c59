//! Pipeline module - one fetch, extract, store, diff run.

mod pipeline_model;
mod pipeline_service;

pub use pipeline_model::PipelineOutcome;
pub use pipeline_service::RankingPipeline;
