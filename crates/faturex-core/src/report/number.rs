//! Brazilian locale number normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ExtractionError;

/// Parse a Brazilian-formatted decimal (`.` thousands separator, `,` decimal
/// separator), e.g. `"1.234,56"`.
pub fn parse_br_decimal(s: &str) -> Result<Decimal, ExtractionError> {
    let cleaned = s.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&cleaned).map_err(|_| ExtractionError::NumberFormat {
        value: s.trim().to_string(),
    })
}

/// Format a decimal in Brazilian style (1.234,56).
pub fn format_br_decimal(value: Decimal) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", text),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i.to_string(), d.to_string()),
        None => (unsigned, String::new()),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, decimal_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_br_decimal() {
        assert_eq!(
            parse_br_decimal("1.234,56").unwrap(),
            Decimal::from_str("1234.56").unwrap()
        );
        assert_eq!(
            parse_br_decimal("10,5").unwrap(),
            Decimal::from_str("10.5").unwrap()
        );
        assert_eq!(
            parse_br_decimal(" 250,75 ").unwrap(),
            Decimal::from_str("250.75").unwrap()
        );
        assert_eq!(
            parse_br_decimal("12.345.678,90").unwrap(),
            Decimal::from_str("12345678.90").unwrap()
        );
        assert_eq!(parse_br_decimal("1000").unwrap(), Decimal::from(1000));
    }

    #[test]
    fn test_parse_br_decimal_rejects_garbage() {
        assert!(parse_br_decimal("").is_err());
        assert!(parse_br_decimal("  ").is_err());
        assert!(parse_br_decimal("1,2,3").is_err());
        assert!(parse_br_decimal("abc").is_err());
        assert!(parse_br_decimal("12a,5").is_err());
    }

    #[test]
    fn test_parse_error_keeps_offending_value() {
        let err = parse_br_decimal(" 1,2,3 ").unwrap_err();
        match err {
            ExtractionError::NumberFormat { value } => assert_eq!(value, "1,2,3"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_br_decimal() {
        assert_eq!(
            format_br_decimal(Decimal::from_str("1234.56").unwrap()),
            "1.234,56"
        );
        assert_eq!(
            format_br_decimal(Decimal::from_str("12345678.90").unwrap()),
            "12.345.678,90"
        );
        assert_eq!(format_br_decimal(Decimal::from(7)), "7");
        assert_eq!(
            format_br_decimal(Decimal::from_str("-1234.5").unwrap()),
            "-1.234,5"
        );
    }

    #[test]
    fn test_round_trip() {
        for s in ["1.234,56", "10,5", "250,75", "999", "0,01", "12.345.678,90"] {
            let value = parse_br_decimal(s).unwrap();
            assert_eq!(parse_br_decimal(&format_br_decimal(value)).unwrap(), value);
        }
    }
}
