//! Owner profile service
//!
//! One profile per owner, created lazily on first access. The logo
//! reference is what the document renderer prints on receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppResult;

/// Profile service
#[derive(Clone)]
pub struct ProfileService {
    db: PgPool,
}

/// Owner profile record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for updating the profile logo
#[derive(Debug, Deserialize)]
pub struct UpdateProfileInput {
    pub logo_url: Option<String>,
}

impl ProfileService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get the owner's profile, creating it on first access
    pub async fn get_or_create(&self, owner_id: Uuid) -> AppResult<Profile> {
        // The no-op DO UPDATE makes RETURNING yield the existing row
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (owner_id)
            VALUES ($1)
            ON CONFLICT (owner_id) DO UPDATE SET owner_id = EXCLUDED.owner_id
            RETURNING id, owner_id, logo_url, created_at
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.db)
        .await?;

        Ok(profile)
    }

    /// Look up the owner's profile without creating one
    pub async fn find(&self, owner_id: Uuid) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, owner_id, logo_url, created_at FROM profiles WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(profile)
    }

    /// Update the profile logo reference
    pub async fn update_logo(
        &self,
        owner_id: Uuid,
        input: UpdateProfileInput,
    ) -> AppResult<Profile> {
        self.get_or_create(owner_id).await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET logo_url = $2
            WHERE owner_id = $1
            RETURNING id, owner_id, logo_url, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&input.logo_url)
        .fetch_one(&self.db)
        .await?;

        Ok(profile)
    }
}
