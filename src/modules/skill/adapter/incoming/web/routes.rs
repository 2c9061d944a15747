// src/modules/skill/adapter/incoming/web/routes.rs

use actix_web::{delete, get, post, put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, DeleteSkillError, GetSingleSkillError, GetSkillsError, UpdateSkillError,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::SkillData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    req: web::Json<SkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateSkillError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/skills/{id}")]
pub async fn get_single_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.get_single.execute(id).await {
        Ok(skill) => ApiResponse::success(skill),

        Err(GetSingleSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(GetSingleSkillError::QueryFailed(msg)) => {
            error!("Failed to fetch skill {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    path: web::Path<Uuid>,
    req: web::Json<SkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Repository error updating skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
