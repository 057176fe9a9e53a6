use crate::error::CertexError;

/// Text pulled from a single page of a certificate document.
#[derive(Debug, Clone)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Trait for document text-extraction backends.
pub trait TextSource: Send + Sync {
    /// Extract text from document bytes, one PageText per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, CertexError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Backend for documents already converted to plain text. The whole input
/// is treated as a single page.
#[derive(Debug, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, CertexError> {
        let text = String::from_utf8_lossy(bytes).into_owned();
        Ok(vec![PageText {
            page_number: 1,
            text,
        }])
    }

    fn backend_name(&self) -> &str {
        "plaintext"
    }
}

/// Pick the page carrying the certificate body. Multi-page documents put
/// the record on one densely printed page, so the longest non-blank page
/// wins.
pub fn select_page_text(pages: &[PageText]) -> Result<&str, CertexError> {
    pages
        .iter()
        .filter(|p| !p.text.trim().is_empty())
        .max_by_key(|p| p.text.trim().len())
        .map(|p| p.text.as_str())
        .ok_or(CertexError::NoTextExtracted)
}
