use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteAboutUseCase, GetAboutUseCase, UpsertAboutUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertAboutUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAboutUseCase + Send + Sync>,
}
