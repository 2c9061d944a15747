use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectResult,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    NotFound,
    Validation(FieldError),
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::Validation(err) => write!(f, "validation failed: {}", err),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: ProjectData)
        -> Result<ProjectResult, UpdateProjectError>;
}
