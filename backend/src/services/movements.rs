//! Movement engine: inbound purchases and outbound sales
//!
//! Each movement mutates the batch ledger and appends one immutable
//! movement row inside a single transaction; the database is the
//! serialization point. Outbound movements lock the product's batches
//! before the sufficiency check so concurrent sales cannot both pass
//! validation and over-drain a batch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::models::batch::{plan_fefo_allocation, StockBatch};
use shared::models::movement::{inbound_detail, MovementKind};
use shared::validation::{validate_lot_code, validate_quantity};

use crate::error::{AppError, AppResult};

/// Movement service for recording inbound and outbound stock movements
#[derive(Clone)]
pub struct MovementService {
    db: PgPool,
}

/// Immutable movement ledger row
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movement {
    pub id: Uuid,
    pub product_id: Uuid,
    pub kind: String,
    pub quantity: i32,
    pub detail: String,
    pub supplier_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording an inbound movement (purchase)
#[derive(Debug, Deserialize)]
pub struct RecordInboundInput {
    pub product_id: Uuid,
    pub supplier_id: Option<Uuid>,
    pub quantity: i32,
    pub lot_code: String,
    pub expiration_date: Option<NaiveDate>,
}

/// Input for recording an outbound movement (sale)
#[derive(Debug, Deserialize)]
pub struct RecordOutboundInput {
    pub product_id: Uuid,
    pub client_id: Option<Uuid>,
    pub quantity: i32,
}

impl MovementService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an inbound movement.
    ///
    /// Finds or creates the batch for (product, lot code), increments its
    /// quantity, and appends the movement row. A batch that already exists
    /// keeps its original expiration date; the input's date only applies on
    /// first creation.
    pub async fn record_inbound(
        &self,
        owner_id: Uuid,
        input: RecordInboundInput,
    ) -> AppResult<Movement> {
        validate_quantity(input.quantity)
            .map_err(|m| AppError::ValidationError(m.to_string()))?;
        validate_lot_code(&input.lot_code)
            .map_err(|m| AppError::ValidationError(m.to_string()))?;
        let lot_code = input.lot_code.trim().to_string();

        let mut tx = self.db.begin().await?;

        let product_owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1 AND owner_id = $2)",
        )
        .bind(input.product_id)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await?;

        if !product_owned {
            return Err(AppError::NotFound("Product".to_string()));
        }

        if let Some(supplier_id) = input.supplier_id {
            let supplier_owned = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM suppliers WHERE id = $1 AND owner_id = $2)",
            )
            .bind(supplier_id)
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

            if !supplier_owned {
                return Err(AppError::NotFound("Supplier".to_string()));
            }
        }

        // First inbound for the pair creates the batch and fixes its
        // expiration date; later inbounds only add quantity.
        sqlx::query(
            r#"
            INSERT INTO batches (product_id, lot_code, expiration_date, quantity)
            VALUES ($1, $2, $3, 0)
            ON CONFLICT (product_id, lot_code) DO NOTHING
            "#,
        )
        .bind(input.product_id)
        .bind(&lot_code)
        .bind(input.expiration_date)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE batches SET quantity = quantity + $3 WHERE product_id = $1 AND lot_code = $2",
        )
        .bind(input.product_id)
        .bind(&lot_code)
        .bind(input.quantity)
        .execute(&mut *tx)
        .await?;

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (product_id, kind, quantity, detail, supplier_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, kind, quantity, detail, supplier_id, client_id, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(MovementKind::Inbound.as_str())
        .bind(input.quantity)
        .bind(inbound_detail(&lot_code))
        .bind(input.supplier_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %input.product_id,
            quantity = input.quantity,
            lot_code = %lot_code,
            "inbound movement recorded"
        );

        Ok(movement)
    }

    /// Record an outbound movement, draining batches in FEFO order.
    ///
    /// Fails with InsufficientStock (and mutates nothing) when the product's
    /// total stock does not cover the request.
    pub async fn record_outbound(
        &self,
        owner_id: Uuid,
        input: RecordOutboundInput,
    ) -> AppResult<Movement> {
        validate_quantity(input.quantity)
            .map_err(|m| AppError::ValidationError(m.to_string()))?;

        let mut tx = self.db.begin().await?;

        let product_owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1 AND owner_id = $2)",
        )
        .bind(input.product_id)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await?;

        if !product_owned {
            return Err(AppError::NotFound("Product".to_string()));
        }

        if let Some(client_id) = input.client_id {
            let client_owned = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1 AND owner_id = $2)",
            )
            .bind(client_id)
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

            if !client_owned {
                return Err(AppError::NotFound("Client".to_string()));
            }
        }

        // Row locks serialize concurrent sales on the same product
        let rows = sqlx::query_as::<_, (Uuid, String, Option<NaiveDate>, i32)>(
            r#"
            SELECT id, lot_code, expiration_date, quantity
            FROM batches
            WHERE product_id = $1
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(input.product_id)
        .fetch_all(&mut *tx)
        .await?;

        let batches: Vec<StockBatch> = rows
            .into_iter()
            .map(|(id, lot_code, expiration_date, quantity)| StockBatch {
                id,
                lot_code,
                expiration_date,
                quantity,
            })
            .collect();

        // Dropping the transaction on error rolls everything back
        let plan = plan_fefo_allocation(&batches, input.quantity)
            .map_err(|e| AppError::InsufficientStock {
                available: e.available,
            })?;

        for draw in &plan.draws {
            let result = sqlx::query(
                "UPDATE batches SET quantity = quantity - $1 WHERE id = $2 AND quantity >= $1",
            )
            .bind(draw.quantity)
            .bind(draw.batch_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::StorageConflict(format!(
                    "batch {} drained by a concurrent movement",
                    draw.lot_code
                )));
            }
        }

        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (product_id, kind, quantity, detail, client_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, kind, quantity, detail, supplier_id, client_id, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(MovementKind::Outbound.as_str())
        .bind(input.quantity)
        .bind(plan.detail())
        .bind(input.client_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %input.product_id,
            quantity = input.quantity,
            batches = plan.draws.len(),
            "outbound movement recorded"
        );

        Ok(movement)
    }
}
