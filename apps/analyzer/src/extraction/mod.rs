//! Text extraction — turns uploaded PDF bytes into a `Document`.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is `PdfTextExtractor`,
//! which decodes on the blocking pool under a timeout. A failed extraction is
//! terminal for that upload: callers skip analysis and report the message.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use pdf::PdfTextExtractor;

/// Text and page count of one uploaded file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub raw_text: String,
    pub page_count: usize,
}

impl Document {
    /// Joins per-page text, each page followed by a newline.
    pub fn from_pages(pages: Vec<String>) -> Self {
        let page_count = pages.len();
        let mut raw_text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
        for page in pages {
            raw_text.push_str(&page);
            raw_text.push('\n');
        }
        Self {
            raw_text,
            page_count,
        }
    }

    /// Whether there is anything to analyze. Whitespace-only text counts as empty.
    pub fn has_text(&self) -> bool {
        !self.raw_text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.raw_text.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }

    /// The first `max_chars` characters, for display.
    pub fn preview(&self, max_chars: usize) -> String {
        self.raw_text.chars().take(max_chars).collect()
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded file is empty")]
    EmptyInput,

    #[error("Could not decode PDF: {0}")]
    Decode(String),

    #[error("PDF decoding timed out after {0} seconds")]
    Timeout(u64),

    #[error("PDF decoder aborted: {0}")]
    Aborted(String),
}

/// The extractor trait. Swap implementations without touching the pipeline or handlers.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<Document, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pages_joins_with_trailing_newlines() {
        let doc = Document::from_pages(vec!["Page one".to_string(), "Page two".to_string()]);
        assert_eq!(doc.raw_text, "Page one\nPage two\n");
        assert_eq!(doc.page_count, 2);
    }

    #[test]
    fn test_blank_pages_have_no_text() {
        let doc = Document::from_pages(vec![String::new(), "  ".to_string()]);
        assert_eq!(doc.page_count, 2);
        assert!(!doc.has_text());
        assert!(!Document::default().has_text());
    }

    #[test]
    fn test_counts_and_preview() {
        let doc = Document::from_pages(vec!["naïve résumé text".to_string()]);
        assert_eq!(doc.word_count(), 3);
        assert_eq!(doc.char_count(), 18);
        assert_eq!(doc.preview(5), "naïve");
    }
}
