//! Line-oriented extraction state machine for the billing report.
//!
//! The report is a flat dump of repeating "header line, then one-or-more
//! month rows" blocks. Month rows never span lines and a new header fully
//! supersedes the previous one, so two states and one carried context are
//! enough.

use tracing::debug;

use crate::category::CategoryTable;
use crate::models::record::BillingRecord;

use super::number::parse_br_decimal;
use super::patterns::{
    FOOTER_MARKER, HEADER_TRAILER, MONTH_LINE, PRODUCT_HEADER, PRODUCT_KEYWORD, SUBTOTAL_MARKER,
};

/// Product announced by the most recent header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductContext {
    pub codigo: String,
    pub descricao: String,
}

/// Either waiting for the first header, or carrying the product that the
/// following month rows belong to.
#[derive(Debug, Clone)]
enum ParserState {
    AwaitingProduct,
    InProduct(ProductContext),
}

/// Consumes one raw line at a time and emits a record per recognized month
/// row.
pub struct LineParser<'a> {
    table: &'a CategoryTable,
    state: ParserState,
}

impl<'a> LineParser<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Self {
            table,
            state: ParserState::AwaitingProduct,
        }
    }

    /// The product the parser is currently inside, if any.
    pub fn context(&self) -> Option<&ProductContext> {
        match &self.state {
            ParserState::AwaitingProduct => None,
            ParserState::InProduct(ctx) => Some(ctx),
        }
    }

    /// Process one raw line.
    ///
    /// Returns a record when the line is a month row and a product context is
    /// active. Every other line is consumed without output: headers replace
    /// the context, boilerplate and unrecognized lines are dropped, and month
    /// rows with malformed numbers are dropped without touching state.
    pub fn push_line(&mut self, raw: &str) -> Option<BillingRecord> {
        let line = raw.trim();
        if line.is_empty() || line.contains(SUBTOTAL_MARKER) || line.contains(FOOTER_MARKER) {
            return None;
        }

        if line.to_uppercase().starts_with(PRODUCT_KEYWORD) {
            if let Some(caps) = PRODUCT_HEADER.captures(line) {
                let codigo = caps[1].trim().to_string();
                let descricao = HEADER_TRAILER
                    .replace(&caps[2], "")
                    .trim_matches([' ', '-'])
                    .to_string();
                self.state = ParserState::InProduct(ProductContext { codigo, descricao });
            }
            // Keyword without the full pattern leaves the context as-is.
            return None;
        }

        let caps = MONTH_LINE.captures(line)?;
        let ctx = match &self.state {
            ParserState::InProduct(ctx) => ctx,
            ParserState::AwaitingProduct => {
                debug!("month row before any product header, dropping: {}", line);
                return None;
            }
        };

        let mes: u32 = caps[1].parse().ok()?;
        let ano: i32 = caps[2].parse().ok()?;
        let quantidade = match parse_br_decimal(&caps[3]) {
            Ok(value) => value,
            Err(err) => {
                debug!("dropping month row ({}): {}", err, line);
                return None;
            }
        };
        let valor = match parse_br_decimal(&caps[4]) {
            Ok(value) => value,
            Err(err) => {
                debug!("dropping month row ({}): {}", err, line);
                return None;
            }
        };

        Some(BillingRecord {
            codigo: ctx.codigo.clone(),
            descricao: ctx.descricao.clone(),
            quantidade,
            valor,
            mes,
            ano,
            categoria: self.table.classify(&ctx.descricao),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryRule;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn table() -> CategoryTable {
        CategoryTable::new(vec![CategoryRule {
            pattern: "DOBRAD".to_string(),
            categoria: "Dobradiças".to_string(),
            prioridade: 1,
        }])
    }

    #[test]
    fn test_header_then_month_rows() {
        let table = table();
        let mut parser = LineParser::new(&table);

        assert!(parser.push_line("PRODUTO: 123 - Dobradiça Reta").is_none());
        let first = parser
            .push_line("MÊS:01/2024 Pedido 10,5 5,0% 250,75 3,0%")
            .unwrap();
        let second = parser
            .push_line("MÊS:02/2024 Pedido 3,0 1,0% 80,00 2,0%")
            .unwrap();

        assert_eq!(first.codigo, "123");
        assert_eq!(first.descricao, "Dobradiça Reta");
        assert_eq!(first.categoria, "Dobradiças");
        assert_eq!(first.quantidade, Decimal::from_str("10.5").unwrap());
        assert_eq!(first.valor, Decimal::from_str("250.75").unwrap());
        assert_eq!(first.mes, 1);
        assert_eq!(first.ano, 2024);

        assert_eq!(second.codigo, "123");
        assert_eq!(second.mes, 2);
    }

    #[test]
    fn test_month_row_before_header_is_dropped() {
        let table = table();
        let mut parser = LineParser::new(&table);

        assert!(parser
            .push_line("MÊS:01/2024 Pedido 10,5 5,0% 250,75 3,0%")
            .is_none());
        assert!(parser.context().is_none());
    }

    #[test]
    fn test_new_header_replaces_context() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line("PRODUTO: 1 - Dobradiça Reta");
        parser.push_line("PRODUTO: 2 - Puxador Alça");
        let record = parser
            .push_line("MÊS:03/2024 x 1,0 1,0% 9,99 1,0%")
            .unwrap();

        assert_eq!(record.codigo, "2");
        assert_eq!(record.descricao, "Puxador Alça");
        assert_eq!(record.categoria, "Outros");
    }

    #[test]
    fn test_header_trailer_and_dashes_stripped() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line(
            "PRODUTO: 77 - Dobradiça Curva - Quantidade % Quantidade Valor % Valor",
        );

        assert_eq!(parser.context().unwrap().descricao, "Dobradiça Curva");
    }

    #[test]
    fn test_malformed_header_is_noop() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line("PRODUTO: 1 - Dobradiça Reta");
        // Keyword present but no code/dash; the previous context survives.
        assert!(parser.push_line("PRODUTO: sem código").is_none());
        assert_eq!(parser.context().unwrap().codigo, "1");
    }

    #[test]
    fn test_boilerplate_lines_are_inert() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line("PRODUTO: 1 - Dobradiça Reta");
        assert!(parser.push_line("Subtotal PRODUTO 1.234,56").is_none());
        assert!(parser.push_line("   www.kunden.com.br   ").is_none());
        assert!(parser.push_line("").is_none());

        // Context is untouched and month rows still attach to it.
        assert!(parser
            .push_line("MÊS:04/2024 x 1,0 1,0% 2,00 1,0%")
            .is_some());
    }

    #[test]
    fn test_unrecognized_lines_are_inert() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line("PRODUTO: 1 - Dobradiça Reta");
        assert!(parser.push_line("Relatório de Faturamento").is_none());
        assert!(parser.push_line("Período: 2024").is_none());
        assert_eq!(parser.context().unwrap().codigo, "1");
    }

    #[test]
    fn test_malformed_number_drops_line_only() {
        let table = table();
        let mut parser = LineParser::new(&table);

        parser.push_line("PRODUTO: 1 - Dobradiça Reta");
        // Quantity token "1,2,3" matches the line shape but fails to
        // normalize; the line is dropped and the context survives.
        assert!(parser
            .push_line("MÊS:05/2024 x 1,2,3 1,0% 9,99 1,0%")
            .is_none());
        let record = parser
            .push_line("MÊS:06/2024 x 2,0 1,0% 9,99 1,0%")
            .unwrap();
        assert_eq!(record.mes, 6);
    }
}
