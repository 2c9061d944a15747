// src/modules/experience/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceData, ExperienceResult,
};
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateExperienceError {
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for CreateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateExperienceError::Validation(err) => write!(f, "validation failed: {}", err),
            CreateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetExperiencesError {
    QueryFailed(String),
}

impl fmt::Display for GetExperiencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetExperiencesError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetSingleExperienceError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleExperienceError::NotFound => write!(f, "experience not found"),
            GetSingleExperienceError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UpdateExperienceError {
    NotFound,
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpdateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateExperienceError::NotFound => write!(f, "experience not found"),
            UpdateExperienceError::Validation(err) => write!(f, "validation failed: {}", err),
            UpdateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteExperienceError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteExperienceError::NotFound => write!(f, "experience not found"),
            DeleteExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, data: ExperienceData)
        -> Result<ExperienceResult, CreateExperienceError>;
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceView>, GetExperiencesError>;
}

#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ExperienceView, GetSingleExperienceError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceResult, UpdateExperienceError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError>;
}
