use crate::rankings::{ChangeRecord, Snapshot};

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    /// The snapshot just persisted
    pub snapshot: Snapshot,
    /// Differences against the previous latest snapshot, in ranking order
    pub changes: Vec<ChangeRecord>,
    /// Whether a previous snapshot existed to compare against
    pub previous_found: bool,
}

impl PipelineOutcome {
    pub fn bank_count(&self) -> usize {
        self.snapshot.bank_count
    }

    /// True when extraction found no qualifying rows. Not an error; callers
    /// decide whether to flag it.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
