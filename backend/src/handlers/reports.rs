//! HTTP handlers for movement reports

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::validation::parse_date_param;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::reports::{MovementReport, ReportFilter, ReportService};
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// List movements newest-first with per-kind counts, optionally filtered
/// to an inclusive date range. Malformed dates are rejected, never ignored.
pub async fn get_movement_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<MovementReport>> {
    let filter = ReportFilter {
        start_date: parse_date_field("start_date", query.start_date.as_deref())?,
        end_date: parse_date_field("end_date", query.end_date.as_deref())?,
    };

    let service = ReportService::new(state.db);
    let report = service
        .movement_report(current_user.0.user_id, &filter)
        .await?;
    Ok(Json(report))
}

fn parse_date_field(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    value
        .map(|s| {
            parse_date_param(s).map_err(|m| AppError::Validation {
                field: field.to_string(),
                message: m.to_string(),
                message_es: "La fecha debe tener el formato AAAA-MM-DD".to_string(),
            })
        })
        .transpose()
}
