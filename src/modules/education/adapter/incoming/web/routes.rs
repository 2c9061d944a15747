// src/modules/education/adapter/incoming/web/routes.rs

use actix_web::{delete, get, post, put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, DeleteEducationError, GetEducationError, GetSingleEducationError,
    UpdateEducationError,
};
use crate::modules::education::application::ports::outgoing::education_repository::EducationData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/education")]
pub async fn create_education_handler(
    req: web::Json<EducationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateEducationError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(CreateEducationError::RepositoryError(e)) => {
            error!("Repository error creating education: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.get_list.execute().await {
        Ok(education) => ApiResponse::success(education),

        Err(GetEducationError::QueryFailed(msg)) => {
            error!("Failed to list education: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/education/{id}")]
pub async fn get_single_education_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.education.get_single.execute(id).await {
        Ok(education) => ApiResponse::success(education),

        Err(GetSingleEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }

        Err(GetSingleEducationError::QueryFailed(msg)) => {
            error!("Failed to fetch education {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    path: web::Path<Uuid>,
    req: web::Json<EducationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.education.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }

        Err(UpdateEducationError::Validation(err)) => ApiResponse::validation_error(&err),

        Err(UpdateEducationError::RepositoryError(e)) => {
            error!("Repository error updating education {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.education.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }

        Err(DeleteEducationError::RepositoryError(e)) => {
            error!("Repository error deleting education {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::education::application::ports::incoming::use_cases::CreateEducationUseCase;
    use crate::modules::education::application::ports::outgoing::education_repository::EducationResult;
    use crate::tests::support::app_state::test_app_state;

    #[derive(Clone)]
    struct MockCreateEducation {
        result: Result<EducationResult, CreateEducationError>,
    }

    #[async_trait]
    impl CreateEducationUseCase for MockCreateEducation {
        async fn execute(
            &self,
            _data: EducationData,
        ) -> Result<EducationResult, CreateEducationError> {
            self.result.clone()
        }
    }

    fn body() -> EducationData {
        EducationData {
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            start_date: NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
            end_date: None,
            description: String::new(),
            gpa: String::new(),
            order: 0,
        }
    }

    fn education_result() -> EducationResult {
        let data = body();
        EducationResult {
            id: Uuid::new_v4(),
            institution: data.institution,
            degree: data.degree,
            field_of_study: data.field_of_study,
            start_date: data.start_date,
            end_date: data.end_date,
            description: data.description,
            gpa: data.gpa,
            order: data.order,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[actix_web::test]
    async fn create_education_success_returns_created() {
        let mut state = test_app_state();
        state.education.create = Arc::new(MockCreateEducation {
            result: Ok(education_result()),
        });

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/education")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["institution"], "State University");
    }

    #[actix_web::test]
    async fn create_education_repository_error_is_internal_error() {
        let mut state = test_app_state();
        state.education.create = Arc::new(MockCreateEducation {
            result: Err(CreateEducationError::RepositoryError("db down".to_string())),
        });

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/education")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
