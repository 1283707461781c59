//! Ranking domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_RANKED_BANKS;

/// One ranked entry in a snapshot.
///
/// `bank_name` is the natural key used to correlate records across snapshots.
/// Uniqueness within a snapshot is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    /// 1-based rank, from the source rank column or extraction order
    pub rank: u32,
    pub bank_name: String,
    /// Parent entity, empty when the source lists none
    pub holding_company: String,
    pub location: String,
    /// Consolidated assets in the source's reporting unit (thousands)
    pub assets: f64,
    pub scraped_at: DateTime<Utc>,
}

/// Immutable capture of the ranking at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub scraped_at: DateTime<Utc>,
    /// Origin identifier, the source URL for HTTP runs
    pub source: String,
    pub bank_count: usize,
    pub banks: Vec<BankRecord>,
}

impl Snapshot {
    /// Builds a snapshot, deriving `bank_count` from the records.
    pub fn new(source: impl Into<String>, scraped_at: DateTime<Utc>, banks: Vec<BankRecord>) -> Self {
        Self {
            scraped_at,
            source: source.into(),
            bank_count: banks.len(),
            banks,
        }
    }

    /// Calendar date (UTC) that keys the dated archive copy.
    pub fn snapshot_date(&self) -> NaiveDate {
        self.scraped_at.date_naive()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

/// Classification of a detected difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    /// Bank absent from the previous snapshot
    NewEntrant { rank: u32 },
    /// Same bank, different rank
    RankChange { from: u32, to: u32 },
    /// Same bank and rank, assets moved materially (percent rounded to 2 places)
    AssetChange { percent: f64 },
}

/// One detected difference between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub bank_name: String,
    pub kind: ChangeKind,
    pub description: String,
}

impl ChangeRecord {
    pub fn new_entrant(bank_name: &str, rank: u32) -> Self {
        Self {
            bank_name: bank_name.to_string(),
            kind: ChangeKind::NewEntrant { rank },
            description: format!(
                "New bank in top {}: {} at rank {}",
                MAX_RANKED_BANKS, bank_name, rank
            ),
        }
    }

    pub fn rank_change(bank_name: &str, from: u32, to: u32) -> Self {
        Self {
            bank_name: bank_name.to_string(),
            kind: ChangeKind::RankChange { from, to },
            description: format!("{}: rank changed from {} to {}", bank_name, from, to),
        }
    }

    pub fn asset_change(bank_name: &str, percent: f64) -> Self {
        Self {
            bank_name: bank_name.to_string(),
            kind: ChangeKind::AssetChange { percent },
            description: format!("{}: assets changed by {:+.2}%", bank_name, percent),
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
