// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::SkillCategory;
use crate::shared::validation::{self, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillData {
    pub name: String,
    pub category: SkillCategory,

    /// 1 = beginner .. 4 = expert; anything else is rejected.
    pub proficiency: i32,

    #[serde(default)]
    pub order: i32,
}

impl SkillData {
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("name", &self.name)?;
        validation::max_len("name", &self.name, 100)?;
        validation::int_range("proficiency", self.proficiency, 1, 4)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: SkillData) -> Result<SkillResult, SkillRepositoryError>;

    async fn update(&self, id: Uuid, data: SkillData)
        -> Result<SkillResult, SkillRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
