//! Position-based column mapping for the published table.
//!
//! The source publishes a combined "name / holding company" cell followed by
//! rank, charter, location, and assets columns. Indices and header tokens are
//! kept here, versioned, so a format change is a configuration change.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_RANKED_BANKS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    /// Bumped whenever the published layout changes
    pub version: u32,
    /// Substring identifying the name column in the header row
    pub name_header: String,
    /// Substring identifying the assets column in the header row
    pub assets_header: String,
    /// Combined "bank / holding company" cell
    pub name: usize,
    /// Rank cell, structured tables only
    pub rank: usize,
    pub location: usize,
    pub assets: usize,
    /// Rows with fewer cells are skipped
    pub min_cells: usize,
    /// Name cells marking non-data rows
    pub sentinel_names: Vec<String>,
    pub max_records: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            version: 1,
            name_header: "Bank Name".to_string(),
            assets_header: "Assets".to_string(),
            name: 0,
            rank: 1,
            location: 3,
            assets: 5,
            min_cells: 6,
            sentinel_names: vec!["Summary:".to_string()],
            max_records: MAX_RANKED_BANKS,
        }
    }
}

impl ColumnMapping {
    /// Parse a mapping from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_sentinel(&self, name_cell: &str) -> bool {
        self.sentinel_names.iter().any(|s| s == name_cell)
    }
}
