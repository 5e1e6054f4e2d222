//! Dashboard aggregate tests
//!
//! Money formatting, the low-stock threshold and the 30-day expiration
//! window. These are the pure pieces behind the dashboard payload.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::models::batch::expires_within;
use shared::models::product::{format_money, is_low_stock, DEFAULT_MIN_STOCK};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod money_tests {
    use super::*;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(dec("1234567.5")), "1,234,567.50");
    }

    #[test]
    fn test_format_money_small_values() {
        assert_eq!(format_money(dec("0")), "0.00");
        assert_eq!(format_money(dec("999.99")), "999.99");
        assert_eq!(format_money(dec("1000")), "1,000.00");
    }

    #[test]
    fn test_format_money_pads_to_two_decimals() {
        assert_eq!(format_money(dec("10.5")), "10.50");
        assert_eq!(format_money(dec("7")), "7.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(dec("-1234.5")), "-1,234.50");
    }
}

#[cfg(test)]
mod low_stock_tests {
    use super::*;

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        assert!(is_low_stock(5, 5));
        assert!(is_low_stock(0, 5));
        assert!(!is_low_stock(6, 5));
    }

    #[test]
    fn test_default_min_stock() {
        assert_eq!(DEFAULT_MIN_STOCK, 5);
        assert!(is_low_stock(5, DEFAULT_MIN_STOCK));
    }

    #[test]
    fn test_zero_threshold_only_flags_empty() {
        assert!(is_low_stock(0, 0));
        assert!(!is_low_stock(1, 0));
    }
}

#[cfg(test)]
mod expiration_window_tests {
    use super::*;

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let today = day(2024, 6, 1);
        assert!(expires_within(Some(today), today, 30));
        assert!(expires_within(Some(today + Duration::days(30)), today, 30));
    }

    #[test]
    fn test_day_after_window_is_out() {
        let today = day(2024, 6, 1);
        assert!(!expires_within(Some(today + Duration::days(31)), today, 30));
    }

    #[test]
    fn test_already_expired_is_out() {
        let today = day(2024, 6, 1);
        assert!(!expires_within(Some(today - Duration::days(1)), today, 30));
    }

    #[test]
    fn test_undated_batches_never_alert() {
        let today = day(2024, 6, 1);
        assert!(!expires_within(None, today, 30));
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

        /// Formatted money always carries exactly two decimal places
        #[test]
        fn prop_format_money_two_decimals(cents in -10_000_000_000i64..=10_000_000_000i64) {
            let value = Decimal::new(cents, 2);
            let formatted = format_money(value);
            let (_, frac) = formatted.rsplit_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
        }

        /// Stripping the separators recovers the plain rendering
        #[test]
        fn prop_format_money_separators_are_cosmetic(cents in -10_000_000_000i64..=10_000_000_000i64) {
            let value = Decimal::new(cents, 2);
            let formatted = format_money(value).replace(',', "");
            prop_assert_eq!(formatted, format!("{:.2}", value));
        }

        /// Low stock is monotone: less stock never clears the alert
        #[test]
        fn prop_low_stock_monotone(stock in 0i64..=1000, min_stock in 0i32..=100) {
            if is_low_stock(stock + 1, min_stock) {
                prop_assert!(is_low_stock(stock, min_stock));
            }
        }

        /// A window of N days accepts exactly the N+1 calendar days it spans
        #[test]
        fn prop_window_size(offset in -60i64..=60) {
            let today = day(2024, 6, 1);
            let target = today + Duration::days(offset);
            let inside = (0..=30).contains(&offset);
            prop_assert_eq!(expires_within(Some(target), today, 30), inside);
        }
    }
}
