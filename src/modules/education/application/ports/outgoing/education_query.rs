// src/modules/education/application/ports/outgoing/education_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub gpa: String,
    pub is_current: bool,
    pub duration: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationQueryError {
    #[error("Education not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Listings come back in the default sort order:
/// (order ASC, start_date DESC).
#[async_trait]
pub trait EducationQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<EducationView, EducationQueryError>;

    async fn list(&self) -> Result<Vec<EducationView>, EducationQueryError>;
}
