//! PDF text source.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Page-oriented text access over a loaded PDF.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the text layer of the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Extract text for one page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}
