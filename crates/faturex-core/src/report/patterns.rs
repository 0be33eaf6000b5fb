//! Line-recognition patterns for the billing-report layout.

use lazy_static::lazy_static;
use regex::Regex;

/// Keyword opening a product header line.
pub const PRODUCT_KEYWORD: &str = "PRODUTO:";

/// Subtotal boilerplate; lines containing it are skipped outright.
pub const SUBTOTAL_MARKER: &str = "Subtotal PRODUTO";

/// Website footer boilerplate; lines containing it are skipped outright.
pub const FOOTER_MARKER: &str = "www.kunden.com.br";

lazy_static! {
    /// Product header: numeric code, dash, free-text description.
    pub static ref PRODUCT_HEADER: Regex = Regex::new(
        r"(?i)^\s*PRODUTO:\s*(\d+)\s*-\s*(.+?)\s*$"
    ).unwrap();

    /// Column-header fragment glued to some descriptions; stripped on capture.
    pub static ref HEADER_TRAILER: Regex = Regex::new(
        r"(?i)\s*Quantidade\s*%\s*Quantidade\s*Valor\s*%\s*Valor\s*$"
    ).unwrap();

    /// Month data line: MM/YYYY, arbitrary filler, quantity, ignored percent,
    /// value, ignored percent.
    pub static ref MONTH_LINE: Regex = Regex::new(
        r"(?i)^\s*MÊS\s*:\s*(\d{2})/(\d{4}).*?\s([\d.,]+)\s+[\d.,]+%\s+([\d.,]+)\s+[\d.,]+%"
    ).unwrap();
}
