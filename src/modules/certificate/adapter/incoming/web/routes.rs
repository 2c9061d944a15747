// src/modules/certificate/adapter/incoming/web/routes.rs

use actix_web::{delete, get, post, put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, DeleteCertificateError, GetCertificatesError,
    GetSingleCertificateError, UpdateCertificateError,
};
use crate::modules::certificate::application::ports::outgoing::certificate_repository::CertificateData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/certificates")]
pub async fn create_certificate_handler(
    req: web::Json<CertificateData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificates.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateCertificateError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(CreateCertificateError::RepositoryError(e)) => {
            error!("Repository error creating certificate: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certificates.get_list.execute().await {
        Ok(certificates) => ApiResponse::success(certificates),

        Err(GetCertificatesError::QueryFailed(msg)) => {
            error!("Failed to list certificates: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/certificates/{id}")]
pub async fn get_single_certificate_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificates.get_single.execute(id).await {
        Ok(certificate) => ApiResponse::success(certificate),

        Err(GetSingleCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(GetSingleCertificateError::QueryFailed(msg)) => {
            error!("Failed to fetch certificate {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/certificates/{id}")]
pub async fn update_certificate_handler(
    path: web::Path<Uuid>,
    req: web::Json<CertificateData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificates.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(UpdateCertificateError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateCertificateError::RepositoryError(e)) => {
            error!("Repository error updating certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/certificates/{id}")]
pub async fn delete_certificate_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificates.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(DeleteCertificateError::RepositoryError(e)) => {
            error!("Repository error deleting certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
