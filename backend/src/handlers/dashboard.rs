//! HTTP handler for the dashboard view

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::dashboard::{Dashboard, DashboardService};
use crate::AppState;

#[derive(Deserialize)]
pub struct DashboardQuery {
    /// Case-insensitive product name filter
    pub search: Option<String>,
}

/// Get dashboard aggregates for the current owner
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<Dashboard>> {
    let service = DashboardService::new(state.db);
    let dashboard = service
        .get_dashboard(current_user.0.user_id, query.search.as_deref())
        .await?;
    Ok(Json(dashboard))
}
