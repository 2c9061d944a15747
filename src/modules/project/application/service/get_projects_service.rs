use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectView,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, tech: Option<String>) -> Result<Vec<ProjectView>, GetProjectsError> {
        // An empty or whitespace-only parameter means "no filter".
        let tech = tech
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        self.query
            .list(ProjectListFilter { tech })
            .await
            .map_err(|e| match e {
                ProjectQueryError::NotFound => GetProjectsError::QueryFailed(e.to_string()),
                ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),
            })
    }
}
