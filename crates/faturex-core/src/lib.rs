//! Core library for billing-report extraction.
//!
//! This crate provides:
//! - PDF text access (lopdf + pdf-extract)
//! - the line-oriented extraction state machine for the "Relatório de
//!   Faturamento" layout
//! - Brazilian locale number normalization
//! - priority-table category classification

pub mod category;
pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use category::{CategoryRule, CategoryTable, DEFAULT_CATEGORY};
pub use error::{ExtractionError, FaturexError, PdfError, Result};
pub use models::config::FaturexConfig;
pub use models::record::BillingRecord;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use report::{LineParser, ProductContext, ReportExtraction, ReportExtractor};
