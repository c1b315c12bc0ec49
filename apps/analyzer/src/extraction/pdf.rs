//! `pdf-extract` backed extractor.
//!
//! Decoding is CPU-bound and the decoder may panic on hostile input, so it runs inside
//! `tokio::task::spawn_blocking`: a panic surfaces as a `JoinError` instead of taking
//! the worker down, and the whole decode is bounded by `timeout`.
//!
//! The timeout only bounds the request. A decode that overruns keeps its blocking
//! thread until the decoder returns, so sustained hostile uploads can occupy the
//! blocking pool (512 threads by default) with abandoned decodes.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::extraction::{Document, ExtractionError, TextExtractor};

/// Synchronous page decoder run on the blocking pool.
pub type DecodeFn = fn(&[u8]) -> Result<Vec<String>, ExtractionError>;

pub struct PdfTextExtractor {
    decoder: DecodeFn,
    timeout: Duration,
}

impl PdfTextExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self::with_decoder(decode_pages, timeout)
    }

    pub fn with_decoder(decoder: DecodeFn, timeout: Duration) -> Self {
        Self { decoder, timeout }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<Document, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let size = bytes.len();
        let decoder = self.decoder;
        let decode = tokio::task::spawn_blocking(move || decoder(&bytes));

        let pages = match tokio::time::timeout(self.timeout, decode).await {
            Ok(Ok(result)) => result?,
            Ok(Err(e)) => {
                warn!("PDF decoder task failed: {e}");
                return Err(ExtractionError::Aborted(e.to_string()));
            }
            Err(_) => {
                warn!("PDF decoding exceeded {:?}", self.timeout);
                return Err(ExtractionError::Timeout(self.timeout.as_secs()));
            }
        };

        debug!("Decoded {} page(s) from {size} bytes", pages.len());
        Ok(Document::from_pages(pages))
    }
}

/// Synchronous decode of every page's text (runs inside spawn_blocking).
fn decode_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PdfTextExtractor {
        PdfTextExtractor::new(Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_empty_bytes_rejected() {
        let err = extractor().extract(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyInput));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_fail_without_panicking() {
        let result = extractor()
            .extract(Bytes::from_static(b"definitely not a pdf"))
            .await;
        assert!(matches!(
            result,
            Err(ExtractionError::Decode(_)) | Err(ExtractionError::Aborted(_))
        ));
    }

    #[tokio::test]
    async fn test_truncated_pdf_header_fails() {
        let result = extractor()
            .extract(Bytes::from_static(b"%PDF-1.4\n1 0 obj\n<<"))
            .await;
        assert!(result.is_err());
    }

    fn slow_decoder(_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        std::thread::sleep(Duration::from_millis(300));
        Ok(vec!["late".to_string()])
    }

    fn panicking_decoder(_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        panic!("decoder blew up");
    }

    fn two_page_decoder(_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        Ok(vec!["first".to_string(), "second".to_string()])
    }

    #[tokio::test]
    async fn test_slow_decode_times_out() {
        let extractor = PdfTextExtractor::with_decoder(slow_decoder, Duration::from_millis(20));
        let err = extractor
            .extract(Bytes::from_static(b"%PDF-1.4"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_decoder_panic_becomes_aborted() {
        let extractor = PdfTextExtractor::with_decoder(panicking_decoder, Duration::from_secs(5));
        let err = extractor
            .extract(Bytes::from_static(b"%PDF-1.4"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Aborted(_)));
    }

    #[tokio::test]
    async fn test_decoded_pages_become_document() {
        let extractor = PdfTextExtractor::with_decoder(two_page_decoder, Duration::from_secs(5));
        let document = extractor
            .extract(Bytes::from_static(b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(document.page_count, 2);
        assert_eq!(document.raw_text, "first\nsecond\n");
    }

    #[test]
    fn test_error_messages_are_user_readable() {
        assert_eq!(
            ExtractionError::Timeout(30).to_string(),
            "PDF decoding timed out after 30 seconds"
        );
        assert!(ExtractionError::Decode("bad xref".to_string())
            .to_string()
            .contains("bad xref"));
    }
}
