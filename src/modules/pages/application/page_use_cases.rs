use std::sync::Arc;

use crate::modules::pages::application::ports::incoming::use_cases::{
    GetContactPageUseCase, GetHomePageUseCase, GetProjectsPageUseCase, GetResumePageUseCase,
};

#[derive(Clone)]
pub struct PageUseCases {
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub projects: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
    pub resume: Arc<dyn GetResumePageUseCase + Send + Sync>,
    pub contact: Arc<dyn GetContactPageUseCase + Send + Sync>,
}
