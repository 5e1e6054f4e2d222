//! Receipt context service
//!
//! Document rendering is an external collaborator; this service assembles
//! the data contract it consumes for one movement: the printed title, the
//! movement with display names, the issue date and the owner's logo.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use shared::models::movement::MovementKind;

use crate::error::{AppError, AppResult};
use crate::services::profile::ProfileService;
use crate::services::reports::{MovementRecord, ReportService};

/// Receipt service
#[derive(Clone)]
pub struct ReceiptService {
    db: PgPool,
}

/// Everything the document renderer needs to produce one receipt
#[derive(Debug, Serialize)]
pub struct ReceiptContext {
    /// "NOTA DE ENTRADA" or "NOTA DE SALIDA"
    pub title: String,
    pub issued_on: NaiveDate,
    /// Suggested download filename
    pub filename: String,
    pub movement: MovementRecord,
    pub logo_url: Option<String>,
}

impl ReceiptService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Build the receipt context for a movement the owner can see
    pub async fn receipt_context(
        &self,
        owner_id: Uuid,
        movement_id: Uuid,
    ) -> AppResult<ReceiptContext> {
        let movement = ReportService::new(self.db.clone())
            .get_movement(owner_id, movement_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Movement".to_string()))?;

        let kind = MovementKind::from_str(&movement.kind)
            .ok_or_else(|| AppError::Internal(format!("unknown movement kind {}", movement.kind)))?;

        let logo_url = ProfileService::new(self.db.clone())
            .find(owner_id)
            .await?
            .and_then(|p| p.logo_url);

        Ok(ReceiptContext {
            title: kind.receipt_title().to_string(),
            issued_on: Utc::now().date_naive(),
            filename: format!("Nota_{}.pdf", movement.id),
            movement,
            logo_url,
        })
    }
}
