//! HTTP handlers for the owner profile

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::profile::{Profile, ProfileService, UpdateProfileInput};
use crate::AppState;

/// Get the current owner's profile, creating it lazily
pub async fn get_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Profile>> {
    let service = ProfileService::new(state.db);
    let profile = service.get_or_create(current_user.0.user_id).await?;
    Ok(Json(profile))
}

/// Update the profile logo reference
pub async fn update_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<UpdateProfileInput>,
) -> AppResult<Json<Profile>> {
    let service = ProfileService::new(state.db);
    let profile = service.update_logo(current_user.0.user_id, input).await?;
    Ok(Json(profile))
}
