use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the hosted `contacts` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub plan_interest: Option<String>,
}

/// Insert payload for `contacts`. `email` is already validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub email: String,
    pub plan_interest: Option<String>,
}
