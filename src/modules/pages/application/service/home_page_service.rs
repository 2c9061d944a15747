use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::about::application::ports::outgoing::about_repository::AboutRepository;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetHomePageUseCase, HomePageView, PageError,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

/// The landing page promotes at most this many featured projects.
const FEATURED_LIMIT: u64 = 3;

pub struct HomePageService {
    about: Arc<dyn AboutRepository>,
    projects: Arc<dyn ProjectQuery>,
}

impl HomePageService {
    pub fn new(about: Arc<dyn AboutRepository>, projects: Arc<dyn ProjectQuery>) -> Self {
        Self { about, projects }
    }
}

#[async_trait]
impl GetHomePageUseCase for HomePageService {
    async fn execute(&self) -> Result<HomePageView, PageError> {
        let about = self
            .about
            .get_or_create()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        let featured_projects = self
            .projects
            .list_featured(FEATURED_LIMIT)
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        Ok(HomePageView {
            about,
            featured_projects,
        })
    }
}
