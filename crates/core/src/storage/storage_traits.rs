use async_trait::async_trait;
use chrono::NaiveDate;

use super::storage_errors::PersistenceError;
use crate::rankings::{ChangeRecord, Snapshot};

/// Durable home of snapshots. Sole authority over what "latest" means.
///
/// After a successful [`write`](Self::write) of `S`, [`read_latest`](Self::read_latest)
/// returns a snapshot equal to `S` until the next successful write.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist `snapshot` under its date and as the latest snapshot.
    ///
    /// Both copies are written or neither is.
    async fn write(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// The most recently written snapshot, `None` before the first write.
    async fn read_latest(&self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Persist a non-empty change report for the run dated `date`.
    async fn write_changes(
        &self,
        date: NaiveDate,
        changes: &[ChangeRecord],
    ) -> Result<(), PersistenceError>;
}
