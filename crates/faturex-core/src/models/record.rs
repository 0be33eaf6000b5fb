//! Output data model for extracted billing rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of billing for one product.
///
/// Immutable once emitted by the parser. The serde renames give the exported
/// column order `Codigo, Descricao, Quantidade, Valor, Mes, Ano, Categoria`
/// (category appended last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRecord {
    /// Product code from the header line.
    #[serde(rename = "Codigo")]
    pub codigo: String,

    /// Product description from the header line, with the column-header
    /// fragment stripped.
    #[serde(rename = "Descricao")]
    pub descricao: String,

    /// Quantity sold in the month.
    #[serde(rename = "Quantidade")]
    pub quantidade: Decimal,

    /// Billed value for the month.
    #[serde(rename = "Valor")]
    pub valor: Decimal,

    /// Month, 1-12.
    #[serde(rename = "Mes")]
    pub mes: u32,

    /// Four-digit year.
    #[serde(rename = "Ano")]
    pub ano: i32,

    /// Category assigned by the pattern table.
    #[serde(rename = "Categoria")]
    pub categoria: String,
}
