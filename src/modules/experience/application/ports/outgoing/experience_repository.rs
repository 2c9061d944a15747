// src/modules/experience/application/ports/outgoing/experience_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{self, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceData {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,

    /// `None` marks the current position.
    pub end_date: Option<NaiveDate>,

    pub description: String,

    /// One achievement per line; may be empty.
    #[serde(default)]
    pub achievements: String,

    #[serde(default)]
    pub order: i32,
}

impl ExperienceData {
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("company", &self.company)?;
        validation::max_len("company", &self.company, 200)?;
        validation::require("position", &self.position)?;
        validation::max_len("position", &self.position, 200)?;
        validation::require("description", &self.description)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResult {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub achievements: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
