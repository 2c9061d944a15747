use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

#[derive(Debug, Clone)]
pub enum GetProjectsError {
    QueryFailed(String),
}

impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// `tech` filters by case-insensitive substring of the raw technologies
/// text; `None` or empty means unfiltered.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, tech: Option<String>) -> Result<Vec<ProjectView>, GetProjectsError>;
}
