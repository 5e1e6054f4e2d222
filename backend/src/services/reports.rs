//! Movement reporting service

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::models::movement::MovementKind;

use crate::error::AppResult;

/// Report service over the movement ledger
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

/// Movement row joined with display names for the report and receipts
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovementRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub kind: String,
    pub quantity: i32,
    pub detail: String,
    pub supplier_id: Option<Uuid>,
    pub supplier_name: Option<String>,
    pub client_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Date-range filter, inclusive on both ends
#[derive(Debug, Default, Deserialize)]
pub struct ReportFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Movement report with per-kind counts over the filtered set
#[derive(Debug, Serialize)]
pub struct MovementReport {
    pub movements: Vec<MovementRecord>,
    pub inbound_count: i64,
    pub outbound_count: i64,
}

/// Count inbound and outbound movements in a filtered set
pub fn count_by_kind(movements: &[MovementRecord]) -> (i64, i64) {
    let inbound = movements
        .iter()
        .filter(|m| MovementKind::from_str(&m.kind) == Some(MovementKind::Inbound))
        .count() as i64;
    let outbound = movements
        .iter()
        .filter(|m| MovementKind::from_str(&m.kind) == Some(MovementKind::Outbound))
        .count() as i64;
    (inbound, outbound)
}

impl ReportService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List the owner's movements newest-first, optionally limited to a
    /// calendar-date range (inclusive on both ends).
    pub async fn movement_report(
        &self,
        owner_id: Uuid,
        filter: &ReportFilter,
    ) -> AppResult<MovementReport> {
        let movements = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT m.id, m.product_id, p.name AS product_name, m.kind, m.quantity, m.detail,
                   m.supplier_id, s.name AS supplier_name,
                   m.client_id, c.name AS client_name,
                   m.created_at
            FROM movements m
            JOIN products p ON p.id = m.product_id
            LEFT JOIN suppliers s ON s.id = m.supplier_id
            LEFT JOIN clients c ON c.id = m.client_id
            WHERE p.owner_id = $1
              AND ($2::DATE IS NULL OR m.created_at::DATE >= $2)
              AND ($3::DATE IS NULL OR m.created_at::DATE <= $3)
            ORDER BY m.created_at DESC, m.id DESC
            "#,
        )
        .bind(owner_id)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_all(&self.db)
        .await?;

        let (inbound_count, outbound_count) = count_by_kind(&movements);

        Ok(MovementReport {
            movements,
            inbound_count,
            outbound_count,
        })
    }

    /// Fetch one movement with display names, owner-scoped
    pub async fn get_movement(
        &self,
        owner_id: Uuid,
        movement_id: Uuid,
    ) -> AppResult<Option<MovementRecord>> {
        let movement = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT m.id, m.product_id, p.name AS product_name, m.kind, m.quantity, m.detail,
                   m.supplier_id, s.name AS supplier_name,
                   m.client_id, c.name AS client_name,
                   m.created_at
            FROM movements m
            JOIN products p ON p.id = m.product_id
            LEFT JOIN suppliers s ON s.id = m.supplier_id
            LEFT JOIN clients c ON c.id = m.client_id
            WHERE m.id = $1 AND p.owner_id = $2
            "#,
        )
        .bind(movement_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(movement)
    }
}
