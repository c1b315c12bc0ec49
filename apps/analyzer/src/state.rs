use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-document data: every request is analyzed in isolation.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
