// src/modules/about/adapter/incoming/web/routes.rs

use actix_web::{delete, get, put, web, Responder};
use tracing::error;

use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteAboutError, GetAboutError, UpsertAboutError,
};
use crate::modules::about::application::ports::outgoing::about_repository::AboutData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get.execute().await {
        Ok(about) => ApiResponse::success(about),

        Err(GetAboutError::RepositoryError(e)) => {
            error!("Repository error fetching about: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/about")]
pub async fn upsert_about_handler(
    req: web::Json<AboutData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.upsert.execute(req.into_inner()).await {
        Ok(about) => ApiResponse::success(about),

        Err(UpsertAboutError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpsertAboutError::RepositoryError(e)) => {
            error!("Repository error upserting about: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/about")]
pub async fn delete_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.delete.execute().await {
        // Unreachable: the use case rejects every delete.
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteAboutError::SingletonViolation) => ApiResponse::conflict(
            "SINGLETON_VIOLATION",
            "The about record cannot be deleted",
        ),
    }
}
