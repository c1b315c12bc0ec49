// Document analysis core: keyword frequency, keyword-in-context search, role matching.
// Everything below `handlers` is pure and synchronous; the profile table and stop words
// are immutable statics.

pub mod handlers;
pub mod highlight;
pub mod keywords;
pub mod profiles;
pub mod resume_sections;
pub mod role_match;
pub mod search;

use serde::{Deserialize, Serialize};

pub use highlight::HighlightStyle;

/// The kind of document being analyzed. Chosen by the user at upload time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Research,
    Resume,
}

impl DocumentType {
    pub fn highlight_style(self) -> HighlightStyle {
        match self {
            DocumentType::Research => HighlightStyle::Research,
            DocumentType::Resume => HighlightStyle::Resume,
        }
    }

    /// Parses the form value sent by the upload page.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "research" | "research paper" | "research_paper" => Some(DocumentType::Research),
            "resume" | "résumé" => Some(DocumentType::Resume),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_parse() {
        assert_eq!(DocumentType::parse("Research Paper"), Some(DocumentType::Research));
        assert_eq!(DocumentType::parse(" resume "), Some(DocumentType::Resume));
        assert_eq!(DocumentType::parse("invoice"), None);
    }

    #[test]
    fn test_document_type_serde() {
        let t: DocumentType = serde_json::from_str(r#""resume""#).unwrap();
        assert_eq!(t, DocumentType::Resume);
        assert_eq!(t.highlight_style(), HighlightStyle::Resume);
    }
}
