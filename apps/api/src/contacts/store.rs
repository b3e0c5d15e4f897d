//! Contact store: the single insert into the hosted `contacts` table.
//!
//! `AppState` holds an `Arc<dyn ContactStore>`. Production uses `PgContactStore`;
//! tests swap in an in-memory store. No retries, no idempotency key.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::contact::{ContactRow, NewContact};

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: NewContact) -> Result<ContactRow, AppError>;
}

/// Postgres-backed store.
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: NewContact) -> Result<ContactRow, AppError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (email, plan_interest)
            VALUES ($1, $2)
            RETURNING id, created_at, email, plan_interest
            "#,
        )
        .bind(&contact.email)
        .bind(&contact.plan_interest)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
