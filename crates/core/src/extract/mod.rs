//! Extract module - locating the ranking table and turning rows into records.
//!
//! Two [`TableExtractor`] implementations share one [`RecordNormalizer`]:
//! - [`HtmlTableExtractor`] for tagged markup (`<table>`)
//! - [`TextTableExtractor`] for column-aligned plain text
//!
//! [`DocumentFormat::detect`] picks between them upstream, see [`extractor_for`].

mod column_mapping;
mod extract_model;
mod extract_traits;
mod html_extractor;
mod normalizer;
mod text_extractor;

pub use column_mapping::ColumnMapping;
pub use extract_model::{DocumentFormat, MalformedRow, RawRow};
pub use extract_traits::TableExtractor;
pub use html_extractor::HtmlTableExtractor;
pub use normalizer::{parse_assets, parse_rank, split_combined_name, RecordNormalizer};
pub use text_extractor::TextTableExtractor;

/// Build the extractor matching `format`.
pub fn extractor_for(format: DocumentFormat, mapping: ColumnMapping) -> Box<dyn TableExtractor> {
    match format {
        DocumentFormat::Html => Box::new(HtmlTableExtractor::new(mapping)),
        DocumentFormat::Text => Box::new(TextTableExtractor::new(mapping)),
    }
}

#[cfg(test)]
mod html_extractor_tests;
