use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectResult, UpdateProjectError> {
        data.validate().map_err(UpdateProjectError::Validation)?;

        self.repository.update(id, data).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
        })
    }
}
