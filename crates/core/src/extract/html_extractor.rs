//! Extraction from tagged markup.

use lazy_static::lazy_static;
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use super::column_mapping::ColumnMapping;
use super::extract_model::{DocumentFormat, MalformedRow, RawRow};
use super::extract_traits::TableExtractor;
use super::normalizer::{parse_assets, split_combined_name, RecordNormalizer};

// Constant selectors; parsing them cannot fail.
lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").expect("valid selector");
    static ref ROW: Selector = Selector::parse("tr").expect("valid selector");
    static ref HEADER_CELL: Selector = Selector::parse("th, td").expect("valid selector");
    static ref DATA_CELL: Selector = Selector::parse("td").expect("valid selector");
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Reads the first `<table>` whose header row names both the bank name and
/// the assets columns.
#[derive(Debug, Clone, Default)]
pub struct HtmlTableExtractor {
    normalizer: RecordNormalizer,
}

impl HtmlTableExtractor {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self {
            normalizer: RecordNormalizer::new(mapping),
        }
    }

    fn mapping(&self) -> &ColumnMapping {
        self.normalizer.mapping()
    }

    fn is_ranking_table(&self, table: ElementRef<'_>) -> bool {
        let Some(header_row) = table.select(&ROW).next() else {
            return false;
        };
        let headers: Vec<String> = header_row.select(&HEADER_CELL).map(cell_text).collect();
        let mapping = self.mapping();

        headers.iter().any(|h| h.contains(&mapping.name_header))
            && headers.iter().any(|h| h.contains(&mapping.assets_header))
    }

    /// Acceptance filter for one data row.
    fn check_row(&self, row: &RawRow) -> Result<(), MalformedRow> {
        let mapping = self.mapping();
        if row.len() < mapping.min_cells {
            return Err(MalformedRow::TooFewCells {
                found: row.len(),
                required: mapping.min_cells,
            });
        }

        let name_cell = row.cell(mapping.name);
        if name_cell.is_empty() {
            return Err(MalformedRow::EmptyName);
        }
        if mapping.is_sentinel(name_cell) {
            return Err(MalformedRow::Sentinel(name_cell.to_string()));
        }

        let assets_cell = row.cell(mapping.assets);
        if assets_cell.is_empty() {
            return Err(MalformedRow::EmptyAssets);
        }

        let (bank_name, _) = split_combined_name(name_cell);
        if bank_name.is_empty() {
            return Err(MalformedRow::EmptyName);
        }

        let assets = parse_assets(assets_cell);
        if assets <= 0.0 {
            return Err(MalformedRow::NonPositiveAssets(assets));
        }

        Ok(())
    }
}

impl TableExtractor for HtmlTableExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn normalizer(&self) -> &RecordNormalizer {
        &self.normalizer
    }

    fn extract_rows(&self, document: &str) -> Vec<RawRow> {
        let html = Html::parse_document(document);
        let Some(table) = html.select(&TABLE).find(|t| self.is_ranking_table(*t)) else {
            info!("No bank data table found in document");
            return Vec::new();
        };

        let header_len = table
            .select(&ROW)
            .next()
            .map(|r| r.select(&HEADER_CELL).count())
            .unwrap_or(0);
        info!("Found bank data table with {} columns", header_len);

        let max_records = self.mapping().max_records;
        let mut accepted = Vec::new();

        for (index, tr) in table.select(&ROW).skip(1).enumerate() {
            if accepted.len() >= max_records {
                break;
            }

            let row: RawRow = tr.select(&DATA_CELL).map(cell_text).collect();
            match self.check_row(&row) {
                Ok(()) => accepted.push(row),
                Err(reason) => debug!("Skipping table row {}: {}", index + 1, reason),
            }
        }

        accepted
    }
}
