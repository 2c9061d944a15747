// src/modules/about/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;

use crate::modules::about::application::ports::outgoing::about_repository::{
    AboutData, AboutResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone)]
pub enum GetAboutError {
    RepositoryError(String),
}

impl fmt::Display for GetAboutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetAboutError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UpsertAboutError {
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpsertAboutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertAboutError::Validation(err) => write!(f, "validation failed: {}", err),
            UpsertAboutError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Deleting the singleton is never allowed; the only outcome is this
/// rejection.
#[derive(Debug, Clone)]
pub enum DeleteAboutError {
    SingletonViolation,
}

impl fmt::Display for DeleteAboutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteAboutError::SingletonViolation => {
                write!(f, "the about record cannot be deleted")
            }
        }
    }
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutResult, GetAboutError>;
}

#[async_trait]
pub trait UpsertAboutUseCase: Send + Sync {
    async fn execute(&self, data: AboutData) -> Result<AboutResult, UpsertAboutError>;
}

#[async_trait]
pub trait DeleteAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), DeleteAboutError>;
}
