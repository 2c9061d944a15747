// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{self, FieldError};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Full field set for create and update; the admin form always submits
/// the whole row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    pub title: String,
    pub description: String,

    /// Comma-separated technology names; may be empty.
    #[serde(default)]
    pub technologies: String,

    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub demo_link: String,

    /// Opaque media path; the core never interprets it.
    pub image: Option<String>,

    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i32,

    pub date_created: NaiveDate,
}

impl ProjectData {
    /// Reject the write when any field violates its constraint; the error
    /// names the field. Nothing is coerced.
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("title", &self.title)?;
        validation::max_len("title", &self.title, 200)?;
        validation::require("description", &self.description)?;
        validation::max_len("technologies", &self.technologies, 500)?;
        validation::max_len("github_link", &self.github_link, 500)?;
        validation::optional_url("github_link", &self.github_link)?;
        validation::max_len("demo_link", &self.demo_link, 500)?;
        validation::optional_url("demo_link", &self.demo_link)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub github_link: String,
    pub demo_link: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub order: i32,
    pub date_created: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: ProjectData) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Full-row update; timestamps are refreshed by the adapter.
    async fn update(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_data() -> ProjectData {
        ProjectData {
            title: "Portfolio Site".to_string(),
            description: "Personal portfolio".to_string(),
            technologies: "Rust, Actix".to_string(),
            github_link: "https://github.com/me/portfolio".to_string(),
            demo_link: String::new(),
            image: None,
            is_featured: false,
            order: 0,
            date_created: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_data() {
        assert!(base_data().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut data = base_data();
        data.title = "  ".to_string();
        assert_eq!(data.validate().unwrap_err().field, "title");
    }

    #[test]
    fn validate_rejects_oversize_technologies() {
        let mut data = base_data();
        data.technologies = "x".repeat(501);
        assert_eq!(data.validate().unwrap_err().field, "technologies");
    }

    #[test]
    fn validate_rejects_malformed_github_link() {
        let mut data = base_data();
        data.github_link = "github.com/me".to_string();
        assert_eq!(data.validate().unwrap_err().field, "github_link");
    }

    #[test]
    fn validate_allows_empty_links_and_technologies() {
        let mut data = base_data();
        data.github_link = String::new();
        data.technologies = String::new();
        assert!(data.validate().is_ok());
    }
}
