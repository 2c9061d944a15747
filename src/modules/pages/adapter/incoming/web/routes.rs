// src/modules/pages/adapter/incoming/web/routes.rs
//
// Public read-only endpoints consumed by the presentation collaborator.

use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::pages::application::ports::incoming::use_cases::PageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectsPageQuery {
    /// Case-insensitive technology substring; absent or empty means all.
    pub tech: Option<String>,
}

#[get("/api/pages/home")]
pub async fn home_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.home.execute().await {
        Ok(page) => ApiResponse::success(page),

        Err(PageError::Failed(msg)) => {
            error!("Failed to build home page context: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/pages/projects")]
pub async fn projects_page_handler(
    query: web::Query<ProjectsPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pages.projects.execute(query.into_inner().tech).await {
        Ok(page) => ApiResponse::success(page),

        Err(PageError::Failed(msg)) => {
            error!("Failed to build projects page context: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/pages/resume")]
pub async fn resume_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.resume.execute().await {
        Ok(page) => ApiResponse::success(page),

        Err(PageError::Failed(msg)) => {
            error!("Failed to build resume page context: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/pages/contact")]
pub async fn contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.contact.execute().await {
        Ok(page) => ApiResponse::success(page),

        Err(PageError::Failed(msg)) => {
            error!("Failed to build contact page context: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
