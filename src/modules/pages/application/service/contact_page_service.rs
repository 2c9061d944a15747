use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::about::application::ports::outgoing::about_repository::AboutRepository;
use crate::modules::pages::application::ports::incoming::use_cases::{
    ContactPageView, GetContactPageUseCase, PageError,
};

pub struct ContactPageService {
    about: Arc<dyn AboutRepository>,
}

impl ContactPageService {
    pub fn new(about: Arc<dyn AboutRepository>) -> Self {
        Self { about }
    }
}

#[async_trait]
impl GetContactPageUseCase for ContactPageService {
    async fn execute(&self) -> Result<ContactPageView, PageError> {
        let about = self
            .about
            .get_or_create()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        Ok(ContactPageView { about })
    }
}
