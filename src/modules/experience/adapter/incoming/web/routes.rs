// src/modules/experience/adapter/incoming/web/routes.rs

use actix_web::{delete, get, post, put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, DeleteExperienceError, GetExperiencesError, GetSingleExperienceError,
    UpdateExperienceError,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experiences.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateExperienceError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experiences.get_list.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(GetExperiencesError::QueryFailed(msg)) => {
            error!("Failed to list experiences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.get_single.execute(id).await {
        Ok(experience) => ApiResponse::success(experience),

        Err(GetSingleExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(GetSingleExperienceError::QueryFailed(msg)) => {
            error!("Failed to fetch experience {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/experiences/{id}")]
pub async fn update_experience_handler(
    path: web::Path<Uuid>,
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(UpdateExperienceError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!("Repository error updating experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!("Repository error deleting experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
