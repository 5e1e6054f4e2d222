//! HTTP handlers for recording movements and exporting receipts

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::movements::{
    Movement, MovementService, RecordInboundInput, RecordOutboundInput,
};
use crate::services::receipts::{ReceiptContext, ReceiptService};
use crate::AppState;

/// Record an inbound movement (purchase into a batch)
pub async fn record_inbound(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordInboundInput>,
) -> AppResult<Json<Movement>> {
    let service = MovementService::new(state.db);
    let movement = service.record_inbound(current_user.0.user_id, input).await?;
    Ok(Json(movement))
}

/// Record an outbound movement (FEFO sale)
pub async fn record_outbound(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordOutboundInput>,
) -> AppResult<Json<Movement>> {
    let service = MovementService::new(state.db);
    let movement = service.record_outbound(current_user.0.user_id, input).await?;
    Ok(Json(movement))
}

/// Get the receipt context for a movement (consumed by the document renderer)
pub async fn get_receipt(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(movement_id): Path<Uuid>,
) -> AppResult<Json<ReceiptContext>> {
    let service = ReceiptService::new(state.db);
    let receipt = service
        .receipt_context(current_user.0.user_id, movement_id)
        .await?;
    Ok(Json(receipt))
}
