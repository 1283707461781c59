use thiserror::Error;

/// Ordered cell texts of one table row, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell text at `index`, empty when the row is shorter.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Shape of a fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Tagged markup with `<table>` elements
    Html,
    /// Column-aligned plain text
    Text,
}

impl DocumentFormat {
    /// Pick a format from the reported content type, falling back to a
    /// structural check for a `<table` tag.
    pub fn detect(content_type: Option<&str>, body: &str) -> Self {
        let declared_html = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("html"))
            .unwrap_or(false);

        if declared_html || body.to_ascii_lowercase().contains("<table") {
            Self::Html
        } else {
            Self::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

/// Why a data row was skipped. Rows are dropped locally, never failing a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedRow {
    #[error("row has {found} cells, need {required}")]
    TooFewCells { found: usize, required: usize },

    #[error("empty name cell")]
    EmptyName,

    #[error("sentinel row '{0}'")]
    Sentinel(String),

    #[error("empty assets cell")]
    EmptyAssets,

    #[error("assets value {0} is not positive")]
    NonPositiveAssets(f64),
}
