use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockProjectRepository {
        result: Result<(), ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepository {
        async fn create(&self, _data: ProjectData) -> Result<ProjectResult, ProjectRepositoryError> {
            unimplemented!("not used in DeleteProjectService tests")
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: ProjectData,
        ) -> Result<ProjectResult, ProjectRepositoryError> {
            unimplemented!("not used in DeleteProjectService tests")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn deletes_existing_project() {
        let service = DeleteProjectService::new(MockProjectRepository { result: Ok(()) });
        assert!(service.execute(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn maps_not_found() {
        let service = DeleteProjectService::new(MockProjectRepository {
            result: Err(ProjectRepositoryError::NotFound),
        });

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(DeleteProjectError::NotFound)
        ));
    }
}
