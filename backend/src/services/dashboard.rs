//! Dashboard aggregation service
//!
//! Derived views over the catalog and batch ledger: stock totals, inventory
//! value, low-stock alerts and the 30-day expiration window.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use shared::models::product::{format_money, is_low_stock};

use crate::error::AppResult;
use crate::services::catalog::{CatalogService, ProductWithStock};

/// How far ahead a batch counts as "expiring soon"
const EXPIRATION_WINDOW_DAYS: i64 = 30;

/// Dashboard service computing owner-level aggregates
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

/// Dashboard aggregates for one owner
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub products: Vec<ProductWithStock>,
    /// Total inventory value, formatted with thousands separators
    pub total_value: String,
    pub low_stock_alerts: Vec<ProductWithStock>,
    pub low_stock_count: usize,
    pub expiring_soon_count: i64,
    pub logo_url: Option<String>,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute dashboard aggregates.
    ///
    /// The name filter applies to the product list, total value and alerts;
    /// the expiring-soon count always spans all of the owner's batches.
    pub async fn get_dashboard(&self, owner_id: Uuid, search: Option<&str>) -> AppResult<Dashboard> {
        let products = CatalogService::new(self.db.clone())
            .list_products(owner_id, search)
            .await?;

        let total_raw: Decimal = products
            .iter()
            .map(|p| p.price * Decimal::from(p.stock_total))
            .sum();

        let low_stock_alerts: Vec<ProductWithStock> = products
            .iter()
            .filter(|p| is_low_stock(p.stock_total, p.min_stock))
            .cloned()
            .collect();

        let today = Utc::now().date_naive();
        let deadline = today + Duration::days(EXPIRATION_WINDOW_DAYS);

        let expiring_soon_count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM batches b
            JOIN products p ON p.id = b.product_id
            WHERE p.owner_id = $1
              AND b.quantity > 0
              AND b.expiration_date BETWEEN $2 AND $3
            "#,
        )
        .bind(owner_id)
        .bind(today)
        .bind(deadline)
        .fetch_one(&self.db)
        .await?;

        let logo_url = sqlx::query_scalar::<_, Option<String>>(
            "SELECT logo_url FROM profiles WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .flatten();

        Ok(Dashboard {
            low_stock_count: low_stock_alerts.len(),
            total_value: format_money(total_raw),
            products,
            low_stock_alerts,
            expiring_soon_count,
            logo_url,
        })
    }
}
