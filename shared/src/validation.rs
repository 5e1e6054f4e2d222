//! Validation utilities for Almacén Digital
//!
//! Includes Peru-specific document number validations for client and
//! supplier records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate a movement quantity (always a positive whole number)
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    Ok(())
}

/// Validate a batch lot code
pub fn validate_lot_code(lot_code: &str) -> Result<(), &'static str> {
    let trimmed = lot_code.trim();
    if trimmed.is_empty() {
        return Err("Lot code cannot be empty");
    }
    if trimmed.len() > 50 {
        return Err("Lot code must be at most 50 characters");
    }
    Ok(())
}

/// Validate a product price
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a minimum-stock threshold
pub fn validate_min_stock(min_stock: i32) -> Result<(), &'static str> {
    if min_stock < 0 {
        return Err("Minimum stock cannot be negative");
    }
    Ok(())
}

/// Parse a report date parameter in `YYYY-MM-DD` form
pub fn parse_date_param(value: &str) -> Result<NaiveDate, &'static str> {
    value
        .trim()
        .parse()
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

// ============================================================================
// Peru-Specific Validations
// ============================================================================

/// Validate a Peruvian RUC (Registro Único de Contribuyentes)
/// 11 digits starting with 10, 15, 17 or 20
pub fn validate_ruc(ruc: &str) -> Result<(), &'static str> {
    let digits: String = ruc.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return Err("RUC must be 11 digits");
    }
    let prefix = &digits[..2];
    if !matches!(prefix, "10" | "15" | "17" | "20") {
        return Err("RUC must start with 10, 15, 17 or 20");
    }
    Ok(())
}

/// Validate a Peruvian DNI (Documento Nacional de Identidad), 8 digits
pub fn validate_dni(dni: &str) -> Result<(), &'static str> {
    let digits: String = dni.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 8 {
        return Err("DNI must be 8 digits");
    }
    Ok(())
}

/// Validate a document number that may be either a DNI or a RUC
pub fn validate_dni_ruc(doc: &str) -> Result<(), &'static str> {
    if validate_dni(doc).is_ok() || validate_ruc(doc).is_ok() {
        Ok(())
    } else {
        Err("Document must be an 8-digit DNI or an 11-digit RUC")
    }
}

/// Validate a Peruvian phone number (9-digit mobile or 7-digit landline,
/// optionally with +51 country code)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        7 | 9 => Ok(()),
        11 if digits.starts_with("51") => Ok(()),
        _ => Err("Invalid phone number format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_lot_code() {
        assert!(validate_lot_code("L-2024-001").is_ok());
        assert!(validate_lot_code("").is_err());
        assert!(validate_lot_code("   ").is_err());
        assert!(validate_lot_code(&"X".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::from(150)).is_ok());
        assert!(validate_price(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_min_stock() {
        assert!(validate_min_stock(0).is_ok());
        assert!(validate_min_stock(5).is_ok());
        assert!(validate_min_stock(-1).is_err());
    }

    #[test]
    fn test_parse_date_param() {
        assert_eq!(
            parse_date_param("2024-03-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert!(parse_date_param(" 2024-03-15 ").is_ok());
        assert!(parse_date_param("15/03/2024").is_err());
        assert!(parse_date_param("2024-13-01").is_err());
        assert!(parse_date_param("").is_err());
    }

    #[test]
    fn test_validate_ruc_valid() {
        assert!(validate_ruc("20123456789").is_ok());
        assert!(validate_ruc("10456789012").is_ok());
    }

    #[test]
    fn test_validate_ruc_invalid() {
        assert!(validate_ruc("123456789").is_err()); // Too short
        assert!(validate_ruc("30123456789").is_err()); // Bad prefix
        assert!(validate_ruc("abcdefghijk").is_err());
    }

    #[test]
    fn test_validate_dni() {
        assert!(validate_dni("12345678").is_ok());
        assert!(validate_dni("1234567").is_err());
        assert!(validate_dni("123456789").is_err());
    }

    #[test]
    fn test_validate_dni_ruc() {
        assert!(validate_dni_ruc("12345678").is_ok());
        assert!(validate_dni_ruc("20123456789").is_ok());
        assert!(validate_dni_ruc("999").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("987654321").is_ok());
        assert!(validate_phone("4567890").is_ok());
        assert!(validate_phone("+51987654321").is_ok());
        assert!(validate_phone("12345").is_err());
    }
}
