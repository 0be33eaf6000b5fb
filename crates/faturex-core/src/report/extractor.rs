//! Report-level orchestration across pages.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{info, warn};

use crate::category::CategoryTable;
use crate::models::record::BillingRecord;
use crate::pdf::PdfProcessor;

use super::parser::LineParser;

/// Result of one extraction pass over a document.
#[derive(Debug, Clone)]
pub struct ReportExtraction {
    /// Records in document order (page order, then line order).
    pub records: Vec<BillingRecord>,
    /// Pages fed to the parser.
    pub pages: u32,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ReportExtraction {
    /// True when the pass produced no records ("no data found").
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct product codes across all records.
    pub fn product_count(&self) -> usize {
        let codes: HashSet<&str> = self.records.iter().map(|r| r.codigo.as_str()).collect();
        codes.len()
    }
}

/// Drives the line parser across all pages of a document.
pub struct ReportExtractor {
    table: CategoryTable,
}

impl ReportExtractor {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// Extractor over the embedded category map.
    pub fn with_embedded_table() -> Self {
        Self::new(CategoryTable::global().clone())
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Extract from page texts in document order.
    ///
    /// One parser runs across all pages, so product context carries over page
    /// breaks. A page with no text is an empty line sequence, not an error.
    pub fn extract_pages<I, S>(&self, pages: I) -> ReportExtraction
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut parser = LineParser::new(&self.table);
        let mut records = Vec::new();
        let mut page_count = 0u32;

        for page in pages {
            page_count += 1;
            for line in page.as_ref().lines() {
                if let Some(record) = parser.push_line(line) {
                    records.push(record);
                }
            }
        }

        info!(
            "extracted {} records from {} pages",
            records.len(),
            page_count
        );

        ReportExtraction {
            records,
            pages: page_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Extract from a single text blob.
    pub fn extract_text(&self, text: &str) -> ReportExtraction {
        self.extract_pages([text])
    }

    /// Extract from a loaded PDF, page by page. A page whose text extraction
    /// fails contributes no lines.
    pub fn extract_pdf<P: PdfProcessor>(&self, pdf: &P) -> ReportExtraction {
        let page_count = pdf.page_count();
        let mut pages = Vec::with_capacity(page_count as usize);

        for page in 1..=page_count {
            let text = match pdf.extract_page_text(page) {
                Ok(text) => text,
                Err(err) => {
                    warn!("page {}: {}", page, err);
                    String::new()
                }
            };
            pages.push(text);
        }

        self.extract_pages(pages)
    }
}
