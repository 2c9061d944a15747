use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
