//! HTTP handlers for the client and supplier registry

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::models::contact::{ContactInput, UpdateContactInput};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::contacts::{Client, ContactService, Supplier};
use crate::AppState;

/// Create a client
pub async fn create_client(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<ContactInput>,
) -> AppResult<Json<Client>> {
    let service = ContactService::new(state.db);
    let client = service.create_client(current_user.0.user_id, input).await?;
    Ok(Json(client))
}

/// List clients
pub async fn list_clients(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Client>>> {
    let service = ContactService::new(state.db);
    let clients = service.list_clients(current_user.0.user_id).await?;
    Ok(Json(clients))
}

/// Update a client
pub async fn update_client(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(client_id): Path<Uuid>,
    Json(input): Json<UpdateContactInput>,
) -> AppResult<Json<Client>> {
    let service = ContactService::new(state.db);
    let client = service
        .update_client(current_user.0.user_id, client_id, input)
        .await?;
    Ok(Json(client))
}

/// Delete a client; referencing movements keep a null reference
pub async fn delete_client(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(client_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ContactService::new(state.db);
    service.delete_client(current_user.0.user_id, client_id).await?;
    Ok(Json(()))
}

/// Create a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<ContactInput>,
) -> AppResult<Json<Supplier>> {
    let service = ContactService::new(state.db);
    let supplier = service.create_supplier(current_user.0.user_id, input).await?;
    Ok(Json(supplier))
}

/// List suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Supplier>>> {
    let service = ContactService::new(state.db);
    let suppliers = service.list_suppliers(current_user.0.user_id).await?;
    Ok(Json(suppliers))
}

/// Update a supplier
pub async fn update_supplier(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(supplier_id): Path<Uuid>,
    Json(input): Json<UpdateContactInput>,
) -> AppResult<Json<Supplier>> {
    let service = ContactService::new(state.db);
    let supplier = service
        .update_supplier(current_user.0.user_id, supplier_id, input)
        .await?;
    Ok(Json(supplier))
}

/// Delete a supplier; referencing movements keep a null reference
pub async fn delete_supplier(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(supplier_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ContactService::new(state.db);
    service
        .delete_supplier(current_user.0.user_id, supplier_id)
        .await?;
    Ok(Json(()))
}
