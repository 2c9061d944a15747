// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Read-side view; `tech_list` carries the parsed technology sequence so
/// consumers never re-split the raw text.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub tech_list: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub order: i32,
    pub date_created: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    /// Case-insensitive substring matched against the raw `technologies`
    /// column. `None` means unfiltered.
    pub tech: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

/// All listings come back in the default sort order:
/// (order ASC, date_created DESC).
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError>;

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Featured rows only, truncated to `limit`.
    async fn list_featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Distinct parsed technology names across all projects,
    /// lexicographically sorted.
    async fn distinct_technologies(&self) -> Result<Vec<String>, ProjectQueryError>;
}
