//! Upload pipeline: bytes → extraction → independent analyzers → one report.
//!
//! Extraction failure short-circuits: the report carries the message and no analysis.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::keywords::{extract_keywords, KeywordCount};
use crate::analysis::resume_sections::{analyze_resume_sections, ResumeOverview};
use crate::analysis::role_match::{compare_roles, score_role, RoleComparison, RoleMatch};
use crate::analysis::search::{smart_search, SearchHit};
use crate::analysis::DocumentType;
use crate::extraction::{Document, TextExtractor};

pub const PREVIEW_CHARS: usize = 1000;

/// Everything the upload form sends, already parsed.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub bytes: Bytes,
    pub doc_type: DocumentType,
    pub role: Option<String>,
    pub compare_roles: Vec<String>,
    pub terms: Vec<String>,
    pub keyword_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Analyzed,
    ExtractionFailed,
    NoText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub size_kb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeReport {
    pub overview: ResumeOverview,
    /// Absent when no role was requested or the role is unknown.
    pub role_match: Option<RoleMatch>,
    pub comparison: Vec<RoleComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub file: FileInfo,
    pub doc_type: DocumentType,
    pub status: AnalysisStatus,
    pub message: Option<String>,
    pub page_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub preview: String,
    pub keywords: Vec<KeywordCount>,
    pub search_hits: Vec<SearchHit>,
    pub resume: Option<ResumeReport>,
}

impl DocumentReport {
    fn without_analysis(
        file: FileInfo,
        doc_type: DocumentType,
        status: AnalysisStatus,
        message: String,
        page_count: usize,
    ) -> Self {
        Self {
            file,
            doc_type,
            status,
            message: Some(message),
            page_count,
            char_count: 0,
            word_count: 0,
            preview: String::new(),
            keywords: vec![],
            search_hits: vec![],
            resume: None,
        }
    }
}

/// Runs the full pipeline for one upload. Never fails: extraction problems are
/// reported inside the returned report.
pub async fn analyze_upload(
    extractor: &dyn TextExtractor,
    request: AnalysisRequest,
) -> DocumentReport {
    let file = FileInfo {
        name: request.file_name.clone(),
        size_kb: request.bytes.len() as f64 / 1024.0,
    };
    info!(
        "Analyzing '{}' ({:.1} KB) as {:?}",
        file.name, file.size_kb, request.doc_type
    );

    let document = match extractor.extract(request.bytes.clone()).await {
        Ok(document) => document,
        Err(e) => {
            warn!("Extraction failed for '{}': {e}", file.name);
            return DocumentReport::without_analysis(
                file,
                request.doc_type,
                AnalysisStatus::ExtractionFailed,
                format!("Error reading PDF: {e}"),
                0,
            );
        }
    };

    if !document.has_text() {
        info!("'{}' has no extractable text", file.name);
        return DocumentReport::without_analysis(
            file,
            request.doc_type,
            AnalysisStatus::NoText,
            "No text could be extracted from this document".to_string(),
            document.page_count,
        );
    }

    info!(
        "Extracted {} page(s) from '{}'",
        document.page_count, file.name
    );
    analyze_document(file, &document, &request)
}

/// Runs every analyzer over an already-extracted document.
pub fn analyze_document(
    file: FileInfo,
    document: &Document,
    request: &AnalysisRequest,
) -> DocumentReport {
    let text = &document.raw_text;

    let resume = match request.doc_type {
        DocumentType::Resume => Some(build_resume_report(text, request)),
        DocumentType::Research => None,
    };

    DocumentReport {
        file,
        doc_type: request.doc_type,
        status: AnalysisStatus::Analyzed,
        message: None,
        page_count: document.page_count,
        char_count: document.char_count(),
        word_count: document.word_count(),
        preview: document.preview(PREVIEW_CHARS),
        keywords: extract_keywords(text, request.keyword_count),
        search_hits: smart_search(text, &request.terms, request.doc_type.highlight_style()),
        resume,
    }
}

fn build_resume_report(text: &str, request: &AnalysisRequest) -> ResumeReport {
    let role_match = request.role.as_deref().and_then(|role| {
        let result = score_role(text, role);
        if result.is_none() {
            warn!("Unknown role requested: '{role}'");
        }
        result
    });

    let comparison = match (&role_match, request.compare_roles.is_empty()) {
        (Some(primary), false) => compare_roles(text, primary.role, &request.compare_roles),
        _ => vec![],
    };

    ResumeReport {
        overview: analyze_resume_sections(text),
        role_match,
        comparison,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionError;
    use async_trait::async_trait;

    struct FixedExtractor(Result<Vec<&'static str>, &'static str>);

    #[async_trait]
    impl TextExtractor for FixedExtractor {
        async fn extract(&self, _bytes: Bytes) -> Result<Document, ExtractionError> {
            match &self.0 {
                Ok(pages) => Ok(Document::from_pages(
                    pages.iter().map(|p| p.to_string()).collect(),
                )),
                Err(msg) => Err(ExtractionError::Decode(msg.to_string())),
            }
        }
    }

    fn request(doc_type: DocumentType) -> AnalysisRequest {
        AnalysisRequest {
            file_name: "cv.pdf".to_string(),
            bytes: Bytes::from(vec![0u8; 2048]),
            doc_type,
            role: Some("Data Scientist".to_string()),
            compare_roles: vec!["Data Analyst".to_string()],
            terms: vec!["python".to_string()],
            keyword_count: 20,
        }
    }

    #[tokio::test]
    async fn test_extraction_failure_short_circuits() {
        let extractor = FixedExtractor(Err("broken xref"));
        let report = analyze_upload(&extractor, request(DocumentType::Resume)).await;

        assert_eq!(report.status, AnalysisStatus::ExtractionFailed);
        assert!(report.message.unwrap().contains("broken xref"));
        assert_eq!(report.page_count, 0);
        assert!(report.keywords.is_empty());
        assert!(report.search_hits.is_empty());
        assert!(report.resume.is_none());
        assert_eq!(report.file.size_kb, 2.0);
    }

    #[tokio::test]
    async fn test_blank_document_is_not_analyzed() {
        let extractor = FixedExtractor(Ok(vec!["   ", ""]));
        let report = analyze_upload(&extractor, request(DocumentType::Resume)).await;

        assert_eq!(report.status, AnalysisStatus::NoText);
        assert_eq!(report.page_count, 2);
        assert!(report.resume.is_none());
    }

    #[tokio::test]
    async fn test_resume_gets_role_analysis_and_comparison() {
        let extractor = FixedExtractor(Ok(vec![
            "Python developer. Strong SQL and data analysis.",
            "Built dashboards in Tableau.",
        ]));
        let report = analyze_upload(&extractor, request(DocumentType::Resume)).await;

        assert_eq!(report.status, AnalysisStatus::Analyzed);
        assert_eq!(report.page_count, 2);
        assert_eq!(report.search_hits.len(), 1);
        assert!(report.search_hits[0].highlighted.contains("resume-highlight"));

        let resume = report.resume.unwrap();
        let role_match = resume.role_match.unwrap();
        assert_eq!(role_match.role, "Data Scientist");
        assert!((role_match.category_scores.core_skills - 60.0).abs() < 1e-9);
        let roles: Vec<&str> = resume.comparison.iter().map(|c| c.role).collect();
        assert_eq!(roles, vec!["Data Scientist", "Data Analyst"]);
    }

    #[tokio::test]
    async fn test_research_paper_skips_resume_sections() {
        let extractor = FixedExtractor(Ok(vec!["Python notebooks were used. Results follow."]));
        let report = analyze_upload(&extractor, request(DocumentType::Research)).await;

        assert!(report.resume.is_none());
        assert!(report.search_hits[0].highlighted.contains("match-highlight"));
        assert!(!report.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_role_omits_role_section() {
        let extractor = FixedExtractor(Ok(vec!["Python and SQL."]));
        let mut req = request(DocumentType::Resume);
        req.role = Some("NotARole".to_string());
        let report = analyze_upload(&extractor, req).await;

        let resume = report.resume.unwrap();
        assert!(resume.role_match.is_none());
        assert!(resume.comparison.is_empty());
    }
}
