//! Cell tuple to [`BankRecord`] conversion.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use super::column_mapping::ColumnMapping;
use super::extract_model::{DocumentFormat, RawRow};
use crate::rankings::BankRecord;

lazy_static! {
    static ref NAME_SEPARATOR: Regex = Regex::new(r"\s*/\s*").expect("valid regex");
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex");
    static ref LEADING_INT: Regex = Regex::new(r"^[+-]?\d+").expect("valid regex");
}

/// Currency symbols and grouping separators removed before parsing assets.
const ASSET_NOISE: &[char] = &['$', '€', '£', '¥', ','];

/// Parse an assets cell such as `"$3,640,000"`.
///
/// Currency symbols and grouping commas are stripped, then the longest leading
/// decimal literal is read. Anything unreadable is `0.0`.
pub fn parse_assets(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| !ASSET_NOISE.contains(c)).collect();
    LEADING_FLOAT
        .find(cleaned.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Leading integer of a rank cell, when it is a positive rank.
pub fn parse_rank(text: &str) -> Option<u32> {
    LEADING_INT
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|rank| *rank > 0)
        .and_then(|rank| u32::try_from(rank).ok())
}

/// Split `"Bank / Holding Co"` into `("Bank", "Holding Co")`.
///
/// Only the first two segments are used; the holding company is empty when
/// there is no separator.
pub fn split_combined_name(combined: &str) -> (String, String) {
    let mut parts = NAME_SEPARATOR.split(combined);
    let bank_name = parts.next().unwrap_or("").trim().to_string();
    let holding_company = parts.next().map(|s| s.trim().to_string()).unwrap_or_default();
    (bank_name, holding_company)
}

/// Turns accepted rows into typed records using a [`ColumnMapping`].
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    mapping: ColumnMapping,
}

impl RecordNormalizer {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Build a record from `row`, the `position`-th accepted row (0-based).
    ///
    /// Structured tables take the rank from the rank cell and fall back to
    /// `position + 1`; text tables always rank by position.
    pub fn normalize(
        &self,
        row: &RawRow,
        position: usize,
        format: DocumentFormat,
        scraped_at: DateTime<Utc>,
    ) -> BankRecord {
        let fallback_rank = u32::try_from(position + 1).unwrap_or(u32::MAX);
        let rank = match format {
            DocumentFormat::Html => parse_rank(row.cell(self.mapping.rank)).unwrap_or(fallback_rank),
            DocumentFormat::Text => fallback_rank,
        };
        let (bank_name, holding_company) = split_combined_name(row.cell(self.mapping.name));

        BankRecord {
            rank,
            bank_name,
            holding_company,
            location: row.cell(self.mapping.location).to_string(),
            assets: parse_assets(row.cell(self.mapping.assets)),
            scraped_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_assets_strips_currency_and_grouping() {
        assert_eq!(parse_assets("$3,640,000"), 3_640_000.0);
        assert_eq!(parse_assets("  1,234.5 "), 1_234.5);
        assert_eq!(parse_assets("€12,000"), 12_000.0);
    }

    #[test]
    fn test_parse_assets_unreadable_is_zero() {
        assert_eq!(parse_assets("n/a"), 0.0);
        assert_eq!(parse_assets(""), 0.0);
        assert_eq!(parse_assets("$"), 0.0);
    }

    #[test]
    fn test_parse_assets_reads_leading_number_only() {
        assert_eq!(parse_assets("3,640,000 (est.)"), 3_640_000.0);
        assert_eq!(parse_assets("-42"), -42.0);
    }

    #[test]
    fn test_parse_rank() {
        assert_eq!(parse_rank(" 7 "), Some(7));
        assert_eq!(parse_rank("12th"), Some(12));
        assert_eq!(parse_rank("0"), None);
        assert_eq!(parse_rank("NAT"), None);
        assert_eq!(parse_rank(""), None);
    }

    #[test]
    fn test_split_combined_name() {
        assert_eq!(
            split_combined_name("JPMORGAN CH BK NA/JPMORGAN CHASE & CO"),
            ("JPMORGAN CH BK NA".to_string(), "JPMORGAN CHASE & CO".to_string())
        );
        assert_eq!(
            split_combined_name("  CITIBANK NA  /  CITIGROUP  "),
            ("CITIBANK NA".to_string(), "CITIGROUP".to_string())
        );
        assert_eq!(
            split_combined_name("TRUIST BK"),
            ("TRUIST BK".to_string(), String::new())
        );
        assert_eq!(
            split_combined_name("A / B / C"),
            ("A".to_string(), "B".to_string())
        );
    }

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_normalize_structured_row_uses_rank_cell() {
        let normalizer = RecordNormalizer::default();
        let at = Utc.with_ymd_and_hms(2026, 10, 12, 6, 0, 0).unwrap();
        let record = normalizer.normalize(
            &row(&[
                "BANK OF AMER NA/BANK OF AMER CORP",
                "2",
                "480228",
                "CHARLOTTE, NC",
                "NAT",
                "$2,540,000",
            ]),
            0,
            DocumentFormat::Html,
            at,
        );

        assert_eq!(record.rank, 2);
        assert_eq!(record.bank_name, "BANK OF AMER NA");
        assert_eq!(record.holding_company, "BANK OF AMER CORP");
        assert_eq!(record.location, "CHARLOTTE, NC");
        assert_eq!(record.assets, 2_540_000.0);
        assert_eq!(record.scraped_at, at);
    }

    #[test]
    fn test_normalize_structured_row_falls_back_to_position() {
        let normalizer = RecordNormalizer::default();
        let record = normalizer.normalize(
            &row(&["WELLS FARGO BK NA", "--", "", "SIOUX FALLS, SD", "", "1,700,000"]),
            4,
            DocumentFormat::Html,
            Utc::now(),
        );
        assert_eq!(record.rank, 5);
    }

    #[test]
    fn test_normalize_text_row_ignores_rank_cell() {
        let normalizer = RecordNormalizer::default();
        let record = normalizer.normalize(
            &row(&["CITIBANK NA / CITIGROUP", "3", "476810", "SIOUX FALLS, SD", "NAT", "1,700,000"]),
            0,
            DocumentFormat::Text,
            Utc::now(),
        );
        assert_eq!(record.rank, 1);
        assert_eq!(record.holding_company, "CITIGROUP");
    }
}
