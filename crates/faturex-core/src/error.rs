//! Error types for the faturex-core library.

use thiserror::Error;

/// Main error type for the faturex library.
#[derive(Error, Debug)]
pub enum FaturexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Report extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to report extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A numeric token on a month line did not normalize. Line-local: the
    /// caller drops the line and keeps going.
    #[error("malformed number: {value}")]
    NumberFormat { value: String },

    /// The category map could not be loaded or has malformed rows.
    #[error("invalid category table: {0}")]
    CategoryTable(String),

    /// The whole pass produced zero records.
    #[error("no report data found")]
    NoData,
}

/// Result type for the faturex library.
pub type Result<T> = std::result::Result<T, FaturexError>;
