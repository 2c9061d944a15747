// src/modules/education/application/ports/outgoing/education_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{self, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationData {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,

    /// `None` while still enrolled.
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: String,

    /// Free text, e.g. "3.8/4.0"; may be empty.
    #[serde(default)]
    pub gpa: String,

    #[serde(default)]
    pub order: i32,
}

impl EducationData {
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("institution", &self.institution)?;
        validation::max_len("institution", &self.institution, 200)?;
        validation::require("degree", &self.degree)?;
        validation::max_len("degree", &self.degree, 200)?;
        validation::require("field_of_study", &self.field_of_study)?;
        validation::max_len("field_of_study", &self.field_of_study, 200)?;
        validation::max_len("gpa", &self.gpa, 50)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResult {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub gpa: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create(&self, data: EducationData)
        -> Result<EducationResult, EducationRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;
}
