use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::pages::application::ports::incoming::use_cases::{
    GetProjectsPageUseCase, PageError, ProjectsPageView,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery,
};

pub struct ProjectsPageService {
    projects: Arc<dyn ProjectQuery>,
}

impl ProjectsPageService {
    pub fn new(projects: Arc<dyn ProjectQuery>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetProjectsPageUseCase for ProjectsPageService {
    async fn execute(&self, tech: Option<String>) -> Result<ProjectsPageView, PageError> {
        let current_tech = tech
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let projects = self
            .projects
            .list(ProjectListFilter {
                tech: current_tech.clone(),
            })
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        // The dropdown always offers every technology, filtered or not.
        let all_technologies = self
            .projects
            .distinct_technologies()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        Ok(ProjectsPageView {
            projects,
            all_technologies,
            current_tech,
        })
    }
}
