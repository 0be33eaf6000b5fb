//! Data models and configuration.

pub mod config;
pub mod embedded;
pub mod record;

pub use config::{CategoryConfig, FaturexConfig, PdfConfig};
pub use record::BillingRecord;
