use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: ProjectData) -> Result<ProjectResult, CreateProjectError> {
        data.validate().map_err(CreateProjectError::Validation)?;

        self.repository.create(data).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => {
                CreateProjectError::RepositoryError("row vanished after insert".to_string())
            }
            ProjectRepositoryError::DatabaseError(msg) => CreateProjectError::RepositoryError(msg),
        })
    }
}
