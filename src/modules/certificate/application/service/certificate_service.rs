use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, CreateCertificateUseCase, DeleteCertificateError,
    DeleteCertificateUseCase, GetCertificatesError, GetCertificatesUseCase,
    GetSingleCertificateError, GetSingleCertificateUseCase, UpdateCertificateError,
    UpdateCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::certificate_query::{
    CertificateQuery, CertificateQueryError, CertificateView,
};
use crate::modules::certificate::application::ports::outgoing::certificate_repository::{
    CertificateData, CertificateRepository, CertificateRepositoryError, CertificateResult,
};

pub struct CertificateService<R, Q>
where
    R: CertificateRepository,
    Q: CertificateQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CertificateService<R, Q>
where
    R: CertificateRepository,
    Q: CertificateQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateCertificateUseCase for CertificateService<R, Q>
where
    R: CertificateRepository + Send + Sync,
    Q: CertificateQuery + Send + Sync,
{
    async fn execute(
        &self,
        data: CertificateData,
    ) -> Result<CertificateResult, CreateCertificateError> {
        data.validate().map_err(CreateCertificateError::Validation)?;

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateCertificateError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetCertificatesUseCase for CertificateService<R, Q>
where
    R: CertificateRepository + Send + Sync,
    Q: CertificateQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetCertificatesError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetSingleCertificateUseCase for CertificateService<R, Q>
where
    R: CertificateRepository + Send + Sync,
    Q: CertificateQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<CertificateView, GetSingleCertificateError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            CertificateQueryError::NotFound => GetSingleCertificateError::NotFound,
            CertificateQueryError::DatabaseError(msg) => {
                GetSingleCertificateError::QueryFailed(msg)
            }
        })
    }
}

#[async_trait]
impl<R, Q> UpdateCertificateUseCase for CertificateService<R, Q>
where
    R: CertificateRepository + Send + Sync,
    Q: CertificateQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: CertificateData,
    ) -> Result<CertificateResult, UpdateCertificateError> {
        data.validate().map_err(UpdateCertificateError::Validation)?;

        self.repository.update(id, data).await.map_err(|e| match e {
            CertificateRepositoryError::NotFound => UpdateCertificateError::NotFound,
            CertificateRepositoryError::DatabaseError(msg) => {
                UpdateCertificateError::RepositoryError(msg)
            }
        })
    }
}

#[async_trait]
impl<R, Q> DeleteCertificateUseCase for CertificateService<R, Q>
where
    R: CertificateRepository + Send + Sync,
    Q: CertificateQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError> {
        self.repository.delete(id).await.map_err(|e| match e {
            CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
            CertificateRepositoryError::DatabaseError(msg) => {
                DeleteCertificateError::RepositoryError(msg)
            }
        })
    }
}
