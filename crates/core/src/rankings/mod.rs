//! Rankings module - bank records, snapshots and change records.

mod rankings_model;

pub use rankings_model::{BankRecord, ChangeKind, ChangeRecord, Snapshot};
