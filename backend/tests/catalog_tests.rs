//! Catalog and contact validation tests
//!
//! Input shapes for products and contacts, plus the Peru document
//! validations used when registering clients and suppliers.

use proptest::prelude::*;
use rust_decimal::Decimal;
use validator::Validate;

use shared::models::contact::{ContactInput, UpdateContactInput};
use shared::models::product::{CreateProductInput, UpdateProductInput};
use shared::validation::{
    validate_dni, validate_dni_ruc, validate_lot_code, validate_min_stock, validate_phone,
    validate_price, validate_quantity, validate_ruc,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod product_input_tests {
    use super::*;

    #[test]
    fn test_valid_product_input() {
        let input = CreateProductInput {
            name: "Café orgánico 500g".to_string(),
            price: dec("25.90"),
            min_stock: Some(10),
            image_url: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let input = CreateProductInput {
            name: String::new(),
            price: dec("25.90"),
            min_stock: None,
            image_url: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let input = CreateProductInput {
            name: "x".repeat(101),
            price: dec("1.00"),
            min_stock: None,
            image_url: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_with_no_fields_is_valid() {
        let input = UpdateProductInput {
            name: None,
            price: None,
            min_stock: None,
            image_url: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_price_and_min_stock_ranges() {
        assert!(validate_price(dec("0")).is_ok());
        assert!(validate_price(dec("199.99")).is_ok());
        assert!(validate_price(dec("-0.01")).is_err());

        assert!(validate_min_stock(0).is_ok());
        assert!(validate_min_stock(-1).is_err());
    }
}

#[cfg(test)]
mod contact_input_tests {
    use super::*;

    #[test]
    fn test_valid_client_input() {
        let input = ContactInput {
            name: "María Torres".to_string(),
            tax_id: Some("12345678".to_string()),
            phone: Some("987654321".to_string()),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_contact_name_required() {
        let input = ContactInput {
            name: String::new(),
            tax_id: None,
            phone: None,
        };
        assert!(input.validate().is_err());
    }

    /// An empty update body deserializes to all-None, which the services
    /// treat as "keep every stored value"
    #[test]
    fn test_empty_update_body_keeps_stored_values() {
        let product: UpdateProductInput = serde_json::from_str("{}").unwrap();
        assert!(product.name.is_none());
        assert!(product.price.is_none());
        assert!(product.min_stock.is_none());
        assert!(product.image_url.is_none());

        let contact: UpdateContactInput = serde_json::from_str("{}").unwrap();
        assert!(contact.name.is_none());
        assert!(contact.tax_id.is_none());
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_update_contact_partial() {
        let input = UpdateContactInput {
            name: None,
            tax_id: Some("20123456789".to_string()),
            phone: None,
        };
        assert!(input.validate().is_ok());
    }
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_ruc_accepts_company_and_person_prefixes() {
        assert!(validate_ruc("20123456789").is_ok()); // company
        assert!(validate_ruc("10876543210").is_ok()); // natural person
        assert!(validate_ruc("15123456789").is_ok());
        assert!(validate_ruc("17123456789").is_ok());
    }

    #[test]
    fn test_ruc_rejects_bad_prefix_and_length() {
        assert!(validate_ruc("30123456789").is_err());
        assert!(validate_ruc("2012345678").is_err());
        assert!(validate_ruc("201234567890").is_err());
    }

    #[test]
    fn test_dni_is_eight_digits() {
        assert!(validate_dni("87654321").is_ok());
        assert!(validate_dni("8765432").is_err());
        assert!(validate_dni("876543210").is_err());
    }

    #[test]
    fn test_client_document_accepts_either_form() {
        assert!(validate_dni_ruc("87654321").is_ok());
        assert!(validate_dni_ruc("20123456789").is_ok());
        assert!(validate_dni_ruc("12345").is_err());
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("987654321").is_ok()); // mobile
        assert!(validate_phone("4651234").is_ok()); // landline
        assert!(validate_phone("+51 987 654 321").is_ok());
        assert!(validate_phone("123").is_err());
    }
}

#[cfg(test)]
mod inventory_validation_tests {
    use super::*;

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-10).is_err());
    }

    #[test]
    fn test_lot_code_rules() {
        assert!(validate_lot_code("L-2024-001").is_ok());
        assert!(validate_lot_code("  ").is_err());
        assert!(validate_lot_code(&"A".repeat(50)).is_ok());
        assert!(validate_lot_code(&"A".repeat(51)).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Quantity validation accepts exactly the positive integers
        #[test]
        fn prop_quantity_positive_iff_valid(quantity in -1000i32..=1000) {
            prop_assert_eq!(validate_quantity(quantity).is_ok(), quantity >= 1);
        }

        /// Any 11-digit string with a known prefix is a shape-valid RUC
        #[test]
        fn prop_ruc_known_prefixes(body in "[0-9]{9}", prefix in prop::sample::select(vec!["10", "15", "17", "20"])) {
            let ruc = format!("{}{}", prefix, body);
            prop_assert!(validate_ruc(&ruc).is_ok());
        }

        /// Any 8-digit string is a shape-valid DNI, and therefore a valid
        /// client document
        #[test]
        fn prop_dni_shapes(dni in "[0-9]{8}") {
            prop_assert!(validate_dni(&dni).is_ok());
            prop_assert!(validate_dni_ruc(&dni).is_ok());
        }

        /// Product names within bounds always validate
        #[test]
        fn prop_product_name_bounds(name in "[a-zA-Z ]{1,100}") {
            let input = CreateProductInput {
                name,
                price: Decimal::ONE,
                min_stock: None,
                image_url: None,
            };
            prop_assert!(input.validate().is_ok());
        }
    }
}
