//! Batch stock math and FEFO allocation planning
//!
//! A batch (lote) is a quantity of one product sharing a lot code and an
//! optional expiration date. Outbound movements drain batches in FEFO order:
//! earliest expiration first, undated batches last.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stock held by one batch, as seen by the allocation planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockBatch {
    pub id: Uuid,
    pub lot_code: String,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: i32,
}

/// A planned draw against a single batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDraw {
    pub batch_id: Uuid,
    pub lot_code: String,
    pub quantity: i32,
}

/// The result of FEFO planning for one outbound movement
#[derive(Debug, Clone)]
pub struct FefoPlan {
    pub draws: Vec<BatchDraw>,
}

impl FefoPlan {
    /// Movement detail text, e.g. `"5 (A-01), 2 (B-02)"`
    pub fn detail(&self) -> String {
        self.draws
            .iter()
            .map(|d| format!("{} ({})", d.quantity, d.lot_code))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Total quantity drawn across all batches
    pub fn total(&self) -> i32 {
        self.draws.iter().map(|d| d.quantity).sum()
    }
}

/// Requested quantity exceeds what the product's batches hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient stock: {available} available")]
pub struct InsufficientStock {
    pub available: i64,
}

/// Total stock across a product's batches
pub fn stock_total(batches: &[StockBatch]) -> i64 {
    batches.iter().map(|b| i64::from(b.quantity)).sum()
}

/// Plan an outbound allocation across batches in FEFO order.
///
/// Batches with stock are visited earliest-expiration first, undated batches
/// last; each contributes `min(remaining, batch.quantity)` until the request
/// is covered. Fails without planning anything when total stock is short.
pub fn plan_fefo_allocation(
    batches: &[StockBatch],
    requested: i32,
) -> Result<FefoPlan, InsufficientStock> {
    let available = stock_total(batches);
    if i64::from(requested) > available {
        return Err(InsufficientStock { available });
    }

    let mut ordered: Vec<&StockBatch> = batches.iter().filter(|b| b.quantity > 0).collect();
    // None sorts after every date; ties keep fetch order
    ordered.sort_by_key(|b| (b.expiration_date.is_none(), b.expiration_date));

    let mut remaining = requested;
    let mut draws = Vec::new();
    for batch in ordered {
        if remaining <= 0 {
            break;
        }
        let take = remaining.min(batch.quantity);
        draws.push(BatchDraw {
            batch_id: batch.id,
            lot_code: batch.lot_code.clone(),
            quantity: take,
        });
        remaining -= take;
    }

    Ok(FefoPlan { draws })
}

/// Whether an expiration date falls inside `[today, today + days]` inclusive.
/// Undated batches never count as expiring.
pub fn expires_within(expiration: Option<NaiveDate>, today: NaiveDate, days: i64) -> bool {
    match expiration {
        Some(date) => date >= today && date <= today + Duration::days(days),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(lot: &str, exp: Option<(i32, u32, u32)>, qty: i32) -> StockBatch {
        StockBatch {
            id: Uuid::new_v4(),
            lot_code: lot.to_string(),
            expiration_date: exp.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            quantity: qty,
        }
    }

    #[test]
    fn fefo_drains_earliest_expiration_first() {
        let batches = vec![
            batch("B", Some((2024, 2, 1)), 5),
            batch("A", Some((2024, 1, 1)), 5),
        ];
        let plan = plan_fefo_allocation(&batches, 7).unwrap();

        assert_eq!(plan.draws.len(), 2);
        assert_eq!(plan.draws[0].lot_code, "A");
        assert_eq!(plan.draws[0].quantity, 5);
        assert_eq!(plan.draws[1].lot_code, "B");
        assert_eq!(plan.draws[1].quantity, 2);
        assert_eq!(plan.detail(), "5 (A), 2 (B)");
    }

    #[test]
    fn fefo_undated_batches_sort_last() {
        let batches = vec![
            batch("SIN-FECHA", None, 10),
            batch("CON-FECHA", Some((2025, 6, 1)), 3),
        ];
        let plan = plan_fefo_allocation(&batches, 5).unwrap();

        assert_eq!(plan.draws[0].lot_code, "CON-FECHA");
        assert_eq!(plan.draws[0].quantity, 3);
        assert_eq!(plan.draws[1].lot_code, "SIN-FECHA");
        assert_eq!(plan.draws[1].quantity, 2);
    }

    #[test]
    fn fefo_skips_empty_batches() {
        let batches = vec![
            batch("VACIO", Some((2024, 1, 1)), 0),
            batch("LLENO", Some((2024, 2, 1)), 8),
        ];
        let plan = plan_fefo_allocation(&batches, 4).unwrap();

        assert_eq!(plan.draws.len(), 1);
        assert_eq!(plan.draws[0].lot_code, "LLENO");
    }

    #[test]
    fn fefo_insufficient_stock_reports_available() {
        let batches = vec![batch("A", Some((2024, 1, 1)), 3), batch("B", None, 2)];
        let err = plan_fefo_allocation(&batches, 6).unwrap_err();

        assert_eq!(err.available, 5);
    }

    #[test]
    fn fefo_exact_stock_is_allowed() {
        let batches = vec![batch("A", Some((2024, 1, 1)), 3), batch("B", None, 2)];
        let plan = plan_fefo_allocation(&batches, 5).unwrap();

        assert_eq!(plan.total(), 5);
        assert_eq!(plan.detail(), "3 (A), 2 (B)");
    }

    #[test]
    fn stock_total_sums_all_batches() {
        let batches = vec![
            batch("A", None, 3),
            batch("B", Some((2024, 5, 1)), 7),
            batch("C", None, 0),
        ];
        assert_eq!(stock_total(&batches), 10);
    }

    #[test]
    fn expires_within_is_inclusive_on_both_ends() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert!(expires_within(Some(today), today, 30));
        assert!(expires_within(Some(today + Duration::days(30)), today, 30));
        assert!(!expires_within(Some(today + Duration::days(31)), today, 30));
        assert!(!expires_within(Some(today - Duration::days(1)), today, 30));
        assert!(!expires_within(None, today, 30));
    }
}
