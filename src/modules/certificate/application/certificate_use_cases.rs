use std::sync::Arc;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateUseCase, DeleteCertificateUseCase, GetCertificatesUseCase,
    GetSingleCertificateUseCase, UpdateCertificateUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub create: Arc<dyn CreateCertificateUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCertificatesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCertificateUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCertificateUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCertificateUseCase + Send + Sync>,
}
