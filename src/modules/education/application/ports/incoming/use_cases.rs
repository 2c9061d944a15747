// src/modules/education/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::education::application::ports::outgoing::education_query::EducationView;
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone)]
pub enum CreateEducationError {
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for CreateEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateEducationError::Validation(err) => write!(f, "validation failed: {}", err),
            CreateEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetEducationError {
    QueryFailed(String),
}

impl fmt::Display for GetEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetEducationError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetSingleEducationError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleEducationError::NotFound => write!(f, "education not found"),
            GetSingleEducationError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UpdateEducationError {
    NotFound,
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpdateEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateEducationError::NotFound => write!(f, "education not found"),
            UpdateEducationError::Validation(err) => write!(f, "validation failed: {}", err),
            UpdateEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteEducationError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteEducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteEducationError::NotFound => write!(f, "education not found"),
            DeleteEducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, data: EducationData) -> Result<EducationResult, CreateEducationError>;
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationView>, GetEducationError>;
}

#[async_trait]
pub trait GetSingleEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<EducationView, GetSingleEducationError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationResult, UpdateEducationError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEducationError>;
}
