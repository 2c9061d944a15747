use async_trait::async_trait;

use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteAboutError, DeleteAboutUseCase, GetAboutError, GetAboutUseCase, UpsertAboutError,
    UpsertAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::about_repository::{
    AboutData, AboutRepository, AboutResult,
};

pub struct AboutService<R>
where
    R: AboutRepository,
{
    repository: R,
}

impl<R> AboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self) -> Result<AboutResult, GetAboutError> {
        self.repository
            .get_or_create()
            .await
            .map_err(|e| GetAboutError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> UpsertAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, data: AboutData) -> Result<AboutResult, UpsertAboutError> {
        data.validate().map_err(UpsertAboutError::Validation)?;

        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpsertAboutError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> DeleteAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self) -> Result<(), DeleteAboutError> {
        // Rejected before the storage layer is ever involved.
        Err(DeleteAboutError::SingletonViolation)
    }
}
