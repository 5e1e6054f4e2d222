//! Product (producto) inputs and value display helpers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for creating a product. The owner is always taken from the caller's
/// identity, never from the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub price: Decimal,
    /// Low-stock alert threshold; defaults to 5 like the paper ledger it replaced
    pub min_stock: Option<i32>,
    #[validate(length(max = 255))]
    pub image_url: Option<String>,
}

/// Partial update for a product. `None` means "keep the stored value", so
/// a nullable field like `image_url` cannot be cleared through an update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductInput {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub min_stock: Option<i32>,
    #[validate(length(max = 255))]
    pub image_url: Option<String>,
}

/// Default low-stock threshold for new products
pub const DEFAULT_MIN_STOCK: i32 = 5;

/// Whether a product should raise a low-stock alert
pub fn is_low_stock(stock_total: i64, min_stock: i32) -> bool {
    stock_total <= i64::from(min_stock)
}

/// Format a monetary value with thousands separators and two decimals,
/// e.g. `1234567.5` becomes `"1,234,567.50"`.
pub fn format_money(value: Decimal) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(dec("1234567.5")), "1,234,567.50");
        assert_eq!(format_money(dec("1000")), "1,000.00");
        assert_eq!(format_money(dec("999.99")), "999.99");
    }

    #[test]
    fn format_money_small_values() {
        assert_eq!(format_money(dec("0")), "0.00");
        assert_eq!(format_money(dec("7.3")), "7.30");
    }

    #[test]
    fn format_money_negative_values() {
        assert_eq!(format_money(dec("-1234.5")), "-1,234.50");
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        assert!(is_low_stock(5, 5));
        assert!(is_low_stock(0, 5));
        assert!(!is_low_stock(6, 5));
    }

    #[test]
    fn create_input_rejects_empty_name() {
        let input = CreateProductInput {
            name: String::new(),
            price: dec("10.00"),
            min_stock: None,
            image_url: None,
        };
        assert!(input.validate().is_err());
    }
}
