// src/modules/certificate/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::certificate::application::ports::outgoing::certificate_query::CertificateView;
use crate::modules::certificate::application::ports::outgoing::certificate_repository::{
    CertificateData, CertificateResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone)]
pub enum CreateCertificateError {
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for CreateCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateCertificateError::Validation(err) => write!(f, "validation failed: {}", err),
            CreateCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetCertificatesError {
    QueryFailed(String),
}

impl fmt::Display for GetCertificatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetCertificatesError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetSingleCertificateError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleCertificateError::NotFound => write!(f, "certificate not found"),
            GetSingleCertificateError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UpdateCertificateError {
    NotFound,
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpdateCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateCertificateError::NotFound => write!(f, "certificate not found"),
            UpdateCertificateError::Validation(err) => write!(f, "validation failed: {}", err),
            UpdateCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteCertificateError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteCertificateError::NotFound => write!(f, "certificate not found"),
            DeleteCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CertificateData,
    ) -> Result<CertificateResult, CreateCertificateError>;
}

#[async_trait]
pub trait GetCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError>;
}

#[async_trait]
pub trait GetSingleCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<CertificateView, GetSingleCertificateError>;
}

#[async_trait]
pub trait UpdateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: CertificateData,
    ) -> Result<CertificateResult, UpdateCertificateError>;
}

#[async_trait]
pub trait DeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError>;
}
