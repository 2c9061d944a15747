// src/modules/skill/application/ports/incoming/use_cases.rs

use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::skill_query::SkillView;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillData, SkillResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone)]
pub enum CreateSkillError {
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for CreateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateSkillError::Validation(err) => write!(f, "validation failed: {}", err),
            CreateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetSkillsError {
    QueryFailed(String),
}

impl fmt::Display for GetSkillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSkillsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GetSingleSkillError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleSkillError::NotFound => write!(f, "skill not found"),
            GetSingleSkillError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UpdateSkillError {
    NotFound,
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpdateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSkillError::NotFound => write!(f, "skill not found"),
            UpdateSkillError::Validation(err) => write!(f, "validation failed: {}", err),
            UpdateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteSkillError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSkillError::NotFound => write!(f, "skill not found"),
            DeleteSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: SkillData) -> Result<SkillResult, CreateSkillError>;
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError>;
}

#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SkillView, GetSingleSkillError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: SkillData) -> Result<SkillResult, UpdateSkillError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError>;
}
