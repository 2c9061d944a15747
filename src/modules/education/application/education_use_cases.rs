use std::sync::Arc;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationUseCase,
    GetSingleEducationUseCase, UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetEducationUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
