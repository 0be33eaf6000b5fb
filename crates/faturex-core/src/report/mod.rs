//! Billing-report extraction: line patterns, number normalization, the
//! line-oriented state machine, and the page orchestrator.

mod extractor;
mod parser;
pub mod number;
pub mod patterns;

pub use extractor::{ReportExtraction, ReportExtractor};
pub use parser::{LineParser, ProductContext};
