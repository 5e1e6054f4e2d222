//! Product catalog service
//!
//! Products are strictly owner-scoped: every query filters by owner_id, and
//! mutations that match zero rows surface as NotFound so callers cannot
//! probe for other owners' records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use shared::models::product::{CreateProductInput, UpdateProductInput, DEFAULT_MIN_STOCK};
use shared::validation::{validate_min_stock, validate_price};

use crate::error::{AppError, AppResult};

/// Catalog service for managing products
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// Product record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub min_stock: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Product with its derived stock total (sum of batch quantities)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductWithStock {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub min_stock: i32,
    pub image_url: Option<String>,
    pub stock_total: i64,
    pub created_at: DateTime<Utc>,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product. The owner is forced to the caller's identity.
    pub async fn create_product(
        &self,
        owner_id: Uuid,
        input: CreateProductInput,
    ) -> AppResult<Product> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        validate_price(input.price).map_err(|m| AppError::ValidationError(m.to_string()))?;

        let min_stock = input.min_stock.unwrap_or(DEFAULT_MIN_STOCK);
        validate_min_stock(min_stock).map_err(|m| AppError::ValidationError(m.to_string()))?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (owner_id, name, price, min_stock, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, name, price, min_stock, image_url, created_at
            "#,
        )
        .bind(owner_id)
        .bind(input.name.trim())
        .bind(input.price)
        .bind(min_stock)
        .bind(&input.image_url)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// List the owner's products with their stock totals, optionally
    /// filtered by a case-insensitive name substring, sorted by name.
    pub async fn list_products(
        &self,
        owner_id: Uuid,
        search: Option<&str>,
    ) -> AppResult<Vec<ProductWithStock>> {
        let products = sqlx::query_as::<_, ProductWithStock>(
            r#"
            SELECT p.id, p.name, p.price, p.min_stock, p.image_url,
                   COALESCE(SUM(b.quantity), 0)::BIGINT AS stock_total,
                   p.created_at
            FROM products p
            LEFT JOIN batches b ON b.product_id = p.id
            WHERE p.owner_id = $1
              AND ($2::TEXT IS NULL OR p.name ILIKE '%' || $2 || '%')
            GROUP BY p.id
            ORDER BY p.name ASC
            "#,
        )
        .bind(owner_id)
        .bind(search)
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Get one product with its stock total
    pub async fn get_product(&self, owner_id: Uuid, product_id: Uuid) -> AppResult<ProductWithStock> {
        let product = sqlx::query_as::<_, ProductWithStock>(
            r#"
            SELECT p.id, p.name, p.price, p.min_stock, p.image_url,
                   COALESCE(SUM(b.quantity), 0)::BIGINT AS stock_total,
                   p.created_at
            FROM products p
            LEFT JOIN batches b ON b.product_id = p.id
            WHERE p.id = $1 AND p.owner_id = $2
            GROUP BY p.id
            "#,
        )
        .bind(product_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Update a product. Omitted fields keep their stored value; nullable
    /// fields cannot be cleared back to null through this path.
    pub async fn update_product(
        &self,
        owner_id: Uuid,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(price) = input.price {
            validate_price(price).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }
        if let Some(min_stock) = input.min_stock {
            validate_min_stock(min_stock).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }

        // One guarded statement: the owner check and the write cannot be
        // split by a concurrent delete
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($1, name),
                price = COALESCE($2, price),
                min_stock = COALESCE($3, min_stock),
                image_url = COALESCE($4, image_url)
            WHERE id = $5 AND owner_id = $6
            RETURNING id, owner_id, name, price, min_stock, image_url, created_at
            "#,
        )
        .bind(input.name.as_deref().map(str::trim))
        .bind(input.price)
        .bind(input.min_stock)
        .bind(&input.image_url)
        .bind(product_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Delete a product. Batches and movements cascade with it.
    pub async fn delete_product(&self, owner_id: Uuid, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND owner_id = $2")
            .bind(product_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }
}
