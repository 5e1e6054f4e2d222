//! Contact registry service for clients and suppliers
//!
//! Contacts are referenced (not owned) by movements: deleting one leaves
//! the referencing movements with a null reference.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use shared::models::contact::{ContactInput, UpdateContactInput};
use shared::validation::{validate_dni_ruc, validate_phone, validate_ruc};

use crate::error::{AppError, AppResult};

/// Contact service for managing clients and suppliers
#[derive(Clone)]
pub struct ContactService {
    db: PgPool,
}

/// Client record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Supplier record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a client. The owner is forced to the caller's identity.
    pub async fn create_client(&self, owner_id: Uuid, input: ContactInput) -> AppResult<Client> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(tax_id) = input.tax_id.as_deref() {
            validate_dni_ruc(tax_id).map_err(|m| AppError::Validation {
                field: "tax_id".to_string(),
                message: m.to_string(),
                message_es: "El documento debe ser un DNI de 8 dígitos o un RUC de 11 dígitos"
                    .to_string(),
            })?;
        }
        if let Some(phone) = input.phone.as_deref() {
            validate_phone(phone).map_err(|m| AppError::Validation {
                field: "phone".to_string(),
                message: m.to_string(),
                message_es: "El teléfono debe tener 9 dígitos (celular) o 7 (fijo)".to_string(),
            })?;
        }

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (owner_id, name, tax_id, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, name, tax_id, phone, created_at
            "#,
        )
        .bind(owner_id)
        .bind(input.name.trim())
        .bind(&input.tax_id)
        .bind(&input.phone)
        .fetch_one(&self.db)
        .await?;

        Ok(client)
    }

    /// List the owner's clients
    pub async fn list_clients(&self, owner_id: Uuid) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, owner_id, name, tax_id, phone, created_at
            FROM clients
            WHERE owner_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(clients)
    }

    /// Update a client. Omitted fields keep their stored value; nullable
    /// fields cannot be cleared back to null through this path.
    pub async fn update_client(
        &self,
        owner_id: Uuid,
        client_id: Uuid,
        input: UpdateContactInput,
    ) -> AppResult<Client> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(tax_id) = input.tax_id.as_deref() {
            validate_dni_ruc(tax_id).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }
        if let Some(phone) = input.phone.as_deref() {
            validate_phone(phone).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }

        // One guarded statement: the owner check and the write cannot be
        // split by a concurrent delete
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = COALESCE($1, name),
                tax_id = COALESCE($2, tax_id),
                phone = COALESCE($3, phone)
            WHERE id = $4 AND owner_id = $5
            RETURNING id, owner_id, name, tax_id, phone, created_at
            "#,
        )
        .bind(input.name.as_deref().map(str::trim))
        .bind(&input.tax_id)
        .bind(&input.phone)
        .bind(client_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Client".to_string()))?;

        Ok(client)
    }

    /// Delete a client. Referencing movements keep a null client reference.
    pub async fn delete_client(&self, owner_id: Uuid, client_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND owner_id = $2")
            .bind(client_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Client".to_string()));
        }

        Ok(())
    }

    /// Create a supplier. The owner is forced to the caller's identity.
    pub async fn create_supplier(
        &self,
        owner_id: Uuid,
        input: ContactInput,
    ) -> AppResult<Supplier> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(tax_id) = input.tax_id.as_deref() {
            validate_ruc(tax_id).map_err(|m| AppError::Validation {
                field: "tax_id".to_string(),
                message: m.to_string(),
                message_es: "El RUC debe tener 11 dígitos y empezar con 10, 15, 17 o 20"
                    .to_string(),
            })?;
        }
        if let Some(phone) = input.phone.as_deref() {
            validate_phone(phone).map_err(|m| AppError::Validation {
                field: "phone".to_string(),
                message: m.to_string(),
                message_es: "El teléfono debe tener 9 dígitos (celular) o 7 (fijo)".to_string(),
            })?;
        }

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (owner_id, name, tax_id, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, name, tax_id, phone, created_at
            "#,
        )
        .bind(owner_id)
        .bind(input.name.trim())
        .bind(&input.tax_id)
        .bind(&input.phone)
        .fetch_one(&self.db)
        .await?;

        Ok(supplier)
    }

    /// List the owner's suppliers
    pub async fn list_suppliers(&self, owner_id: Uuid) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, owner_id, name, tax_id, phone, created_at
            FROM suppliers
            WHERE owner_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    /// Update a supplier. Omitted fields keep their stored value; nullable
    /// fields cannot be cleared back to null through this path.
    pub async fn update_supplier(
        &self,
        owner_id: Uuid,
        supplier_id: Uuid,
        input: UpdateContactInput,
    ) -> AppResult<Supplier> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if let Some(tax_id) = input.tax_id.as_deref() {
            validate_ruc(tax_id).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }
        if let Some(phone) = input.phone.as_deref() {
            validate_phone(phone).map_err(|m| AppError::ValidationError(m.to_string()))?;
        }

        // One guarded statement: the owner check and the write cannot be
        // split by a concurrent delete
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers
            SET name = COALESCE($1, name),
                tax_id = COALESCE($2, tax_id),
                phone = COALESCE($3, phone)
            WHERE id = $4 AND owner_id = $5
            RETURNING id, owner_id, name, tax_id, phone, created_at
            "#,
        )
        .bind(input.name.as_deref().map(str::trim))
        .bind(&input.tax_id)
        .bind(&input.phone)
        .bind(supplier_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Supplier".to_string()))?;

        Ok(supplier)
    }

    /// Delete a supplier. Referencing movements keep a null supplier reference.
    pub async fn delete_supplier(&self, owner_id: Uuid, supplier_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1 AND owner_id = $2")
            .bind(supplier_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        Ok(())
    }
}
