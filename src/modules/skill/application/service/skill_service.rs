use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase,
    GetSingleSkillError, GetSingleSkillUseCase, GetSkillsError, GetSkillsUseCase,
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError, SkillView,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillData, SkillRepository, SkillRepositoryError, SkillResult,
};

pub struct SkillService<R, Q>
where
    R: SkillRepository,
    Q: SkillQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> SkillService<R, Q>
where
    R: SkillRepository,
    Q: SkillQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateSkillUseCase for SkillService<R, Q>
where
    R: SkillRepository + Send + Sync,
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, data: SkillData) -> Result<SkillResult, CreateSkillError> {
        data.validate().map_err(CreateSkillError::Validation)?;

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetSkillsUseCase for SkillService<R, Q>
where
    R: SkillRepository + Send + Sync,
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError> {
        self.query
            .list()
            .await
            .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetSingleSkillUseCase for SkillService<R, Q>
where
    R: SkillRepository + Send + Sync,
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<SkillView, GetSingleSkillError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            SkillQueryError::NotFound => GetSingleSkillError::NotFound,
            SkillQueryError::DatabaseError(msg) => GetSingleSkillError::QueryFailed(msg),
        })
    }
}

#[async_trait]
impl<R, Q> UpdateSkillUseCase for SkillService<R, Q>
where
    R: SkillRepository + Send + Sync,
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: SkillData) -> Result<SkillResult, UpdateSkillError> {
        data.validate().map_err(UpdateSkillError::Validation)?;

        self.repository.update(id, data).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
        })
    }
}

#[async_trait]
impl<R, Q> DeleteSkillUseCase for SkillService<R, Q>
where
    R: SkillRepository + Send + Sync,
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository.delete(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => DeleteSkillError::RepositoryError(msg),
        })
    }
}
