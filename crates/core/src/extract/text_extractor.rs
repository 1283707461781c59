//! Extraction from column-aligned plain text.

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use super::column_mapping::ColumnMapping;
use super::extract_model::{DocumentFormat, MalformedRow, RawRow};
use super::extract_traits::TableExtractor;
use super::normalizer::RecordNormalizer;

lazy_static! {
    static ref COLUMN_GAP: Regex = Regex::new(r"\s{2,}").expect("valid regex");
}

/// Literal markers of header and separator lines.
const HEADER_MARKERS: &[&str] = &["Bank Name", "---", "Rank"];

/// Split a line on runs of two or more whitespace characters, so single
/// spaces inside bank names survive.
pub(crate) fn split_columns(line: &str) -> RawRow {
    COLUMN_GAP
        .split(line.trim())
        .map(str::trim)
        .filter(|col| !col.is_empty())
        .collect()
}

/// Reads rows from a whitespace-aligned text table.
///
/// The first non-header line with enough columns starts the data. From there
/// a window of at most `max_records` lines is scanned; lines with too few
/// columns inside the window are skipped but still use up the window.
#[derive(Debug, Clone, Default)]
pub struct TextTableExtractor {
    normalizer: RecordNormalizer,
}

impl TextTableExtractor {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self {
            normalizer: RecordNormalizer::new(mapping),
        }
    }

    fn min_cells(&self) -> usize {
        self.normalizer.mapping().min_cells
    }

    fn is_data_start(&self, line: &str) -> bool {
        !line.is_empty()
            && !HEADER_MARKERS.iter().any(|marker| line.contains(marker))
            && split_columns(line).len() >= self.min_cells()
    }
}

impl TableExtractor for TextTableExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    fn normalizer(&self) -> &RecordNormalizer {
        &self.normalizer
    }

    fn extract_rows(&self, document: &str) -> Vec<RawRow> {
        let lines: Vec<&str> = document.split('\n').map(str::trim).collect();

        let Some(start) = lines.iter().position(|line| self.is_data_start(line)) else {
            info!("No data rows found in text table");
            return Vec::new();
        };

        let window = self.normalizer.mapping().max_records;
        let end = (start + window).min(lines.len());
        let mut rows = Vec::new();

        for (offset, line) in lines[start..end].iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let row = split_columns(line);
            if row.len() >= self.min_cells() {
                rows.push(row);
            } else {
                let reason = MalformedRow::TooFewCells {
                    found: row.len(),
                    required: self.min_cells(),
                };
                debug!("Skipping text line {}: {}", start + offset + 1, reason);
            }
        }

        info!(
            "Text table data starts at line {}, {} rows accepted",
            start + 1,
            rows.len()
        );
        rows
    }
}
