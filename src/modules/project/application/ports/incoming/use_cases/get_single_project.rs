use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

#[derive(Debug, Clone)]
pub enum GetSingleProjectError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleProjectError::NotFound => write!(f, "project not found"),
            GetSingleProjectError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProjectView, GetSingleProjectError>;
}
