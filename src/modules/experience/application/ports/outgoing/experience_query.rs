// src/modules/experience/application/ports/outgoing/experience_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read-side view carrying the derived display values alongside the raw
/// fields, so templates never re-derive them.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub achievements: Vec<String>,
    pub is_current: bool,
    pub duration: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Listings come back in the default sort order:
/// (order ASC, start_date DESC).
#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<ExperienceView, ExperienceQueryError>;

    async fn list(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError>;
}
