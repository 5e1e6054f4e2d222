//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::models::product::{CreateProductInput, UpdateProductInput};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::catalog::{CatalogService, Product, ProductWithStock};
use crate::AppState;

#[derive(Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateProductInput>,
) -> AppResult<Json<Product>> {
    let service = CatalogService::new(state.db);
    let product = service.create_product(current_user.0.user_id, input).await?;
    Ok(Json(product))
}

/// List products with stock totals
pub async fn list_products(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<ProductWithStock>>> {
    let service = CatalogService::new(state.db);
    let products = service
        .list_products(current_user.0.user_id, query.search.as_deref())
        .await?;
    Ok(Json(products))
}

/// Get one product with its stock total
pub async fn get_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<ProductWithStock>> {
    let service = CatalogService::new(state.db);
    let product = service.get_product(current_user.0.user_id, product_id).await?;
    Ok(Json(product))
}

/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let service = CatalogService::new(state.db);
    let product = service
        .update_product(current_user.0.user_id, product_id, input)
        .await?;
    Ok(Json(product))
}

/// Delete a product (cascades to batches and movements)
pub async fn delete_product(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = CatalogService::new(state.db);
    service.delete_product(current_user.0.user_id, product_id).await?;
    Ok(Json(()))
}
