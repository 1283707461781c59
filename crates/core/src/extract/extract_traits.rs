use chrono::{DateTime, Utc};

use super::extract_model::{DocumentFormat, RawRow};
use super::normalizer::RecordNormalizer;
use crate::rankings::BankRecord;

/// Locates the ranking table in a document and yields its rows in order.
///
/// Extraction is pure and synchronous. A document without a qualifying
/// table yields no rows; that is not an error.
pub trait TableExtractor: Send + Sync {
    /// Format this extractor understands.
    fn format(&self) -> DocumentFormat;

    /// Normalizer sharing this extractor's column mapping.
    fn normalizer(&self) -> &RecordNormalizer;

    /// Accepted data rows in table order, capped at the mapping's record limit.
    fn extract_rows(&self, document: &str) -> Vec<RawRow>;

    /// Accepted rows normalized into records stamped with `scraped_at`.
    fn extract(&self, document: &str, scraped_at: DateTime<Utc>) -> Vec<BankRecord> {
        self.extract_rows(document)
            .iter()
            .enumerate()
            .map(|(position, row)| {
                self.normalizer()
                    .normalize(row, position, self.format(), scraped_at)
            })
            .collect()
    }
}
