use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase, DeleteEducationError, DeleteEducationUseCase,
    GetEducationError, GetEducationUseCase, GetSingleEducationError, GetSingleEducationUseCase,
    UpdateEducationError, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_query::{
    EducationQuery, EducationQueryError, EducationView,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationRepository, EducationRepositoryError, EducationResult,
};

pub struct EducationService<R, Q>
where
    R: EducationRepository,
    Q: EducationQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> EducationService<R, Q>
where
    R: EducationRepository,
    Q: EducationQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateEducationUseCase for EducationService<R, Q>
where
    R: EducationRepository + Send + Sync,
    Q: EducationQuery + Send + Sync,
{
    async fn execute(&self, data: EducationData) -> Result<EducationResult, CreateEducationError> {
        data.validate().map_err(CreateEducationError::Validation)?;

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateEducationError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetEducationUseCase for EducationService<R, Q>
where
    R: EducationRepository + Send + Sync,
    Q: EducationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EducationView>, GetEducationError> {
        self.query
            .list()
            .await
            .map_err(|e| GetEducationError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetSingleEducationUseCase for EducationService<R, Q>
where
    R: EducationRepository + Send + Sync,
    Q: EducationQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<EducationView, GetSingleEducationError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            EducationQueryError::NotFound => GetSingleEducationError::NotFound,
            EducationQueryError::DatabaseError(msg) => GetSingleEducationError::QueryFailed(msg),
        })
    }
}

#[async_trait]
impl<R, Q> UpdateEducationUseCase for EducationService<R, Q>
where
    R: EducationRepository + Send + Sync,
    Q: EducationQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationResult, UpdateEducationError> {
        data.validate().map_err(UpdateEducationError::Validation)?;

        self.repository.update(id, data).await.map_err(|e| match e {
            EducationRepositoryError::NotFound => UpdateEducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => {
                UpdateEducationError::RepositoryError(msg)
            }
        })
    }
}

#[async_trait]
impl<R, Q> DeleteEducationUseCase for EducationService<R, Q>
where
    R: EducationRepository + Send + Sync,
    Q: EducationQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEducationError> {
        self.repository.delete(id).await.map_err(|e| match e {
            EducationRepositoryError::NotFound => DeleteEducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => {
                DeleteEducationError::RepositoryError(msg)
            }
        })
    }
}
