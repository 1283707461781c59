//! BankRank Core - fetching, extracting, storing and diffing the large bank ranking.
//!
//! One run of [`RankingPipeline`] goes through:
//!
//! ```text
//! Fetcher ──> TableExtractor ──> RecordNormalizer ──> SnapshotStore.write ──> detect_changes
//!   (retry)     (html | text)      (BankRecord)        (dated + latest)      (vs. previous latest)
//! ```
//!
//! Fetch and persistence failures abort a run; malformed rows are skipped.
//! Scheduling, single-flight enforcement and notifications belong to the caller.

pub mod changes;
pub mod constants;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod rankings;
pub mod storage;

pub use changes::detect_changes;
pub use extract::{ColumnMapping, DocumentFormat, TableExtractor};
pub use fetch::{DocumentSource, FetchConfig, Fetcher, HttpDocumentSource};
pub use pipeline::{PipelineOutcome, RankingPipeline};
pub use rankings::{BankRecord, ChangeKind, ChangeRecord, Snapshot};
pub use storage::{JsonSnapshotStore, SnapshotStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
