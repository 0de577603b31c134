//! Display helpers for the console view. Nothing in the state core depends on
//! these.

use crate::domain::model::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    pub currency_symbol: String,
    pub thousands_separator: char,
}

impl Default for PriceFormat {
    /// Indonesian rupiah with id-ID digit grouping.
    fn default() -> Self {
        Self {
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
        }
    }
}

/// Whole-unit price with grouped digits, e.g. `Rp 1.200.000`.
pub fn format_price(price: u64, format: &PriceFormat) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(format.thousands_separator);
        }
        grouped.push(ch);
    }

    if format.currency_symbol.is_empty() {
        grouped
    } else {
        format!("{} {}", format.currency_symbol, grouped)
    }
}

/// Catalog model code shown in the detail view: `#001`.
pub fn model_code(id: ItemId) -> String {
    format!("#{:03}", id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        let idr = PriceFormat::default();
        assert_eq!(format_price(1_200_000, &idr), "Rp 1.200.000");
        assert_eq!(format_price(999, &idr), "Rp 999");
        assert_eq!(format_price(0, &idr), "Rp 0");
    }

    #[test]
    fn test_format_price_custom_separator() {
        let usd = PriceFormat {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
        };
        assert_eq!(format_price(45_000, &usd), "$ 45,000");
    }

    #[test]
    fn test_model_code_is_zero_padded() {
        assert_eq!(model_code(ItemId(7)), "#007");
        assert_eq!(model_code(ItemId(1234)), "#1234");
    }
}
