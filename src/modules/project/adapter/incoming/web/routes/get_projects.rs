use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetProjectsQuery {
    /// Case-insensitive technology substring; absent or empty means all.
    pub tech: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.get_list.execute(query.into_inner().tech).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
    use crate::tests::support::app_state::test_app_state;

    /* --------------------------------------------------
     * Mock GetProjects Use Case
     * -------------------------------------------------- */

    struct MockGetProjectsUseCase {
        result: Result<Vec<ProjectView>, GetProjectsError>,
        seen_tech: Mutex<Option<Option<String>>>,
    }

    impl MockGetProjectsUseCase {
        fn success(result: Vec<ProjectView>) -> Self {
            Self {
                result: Ok(result),
                seen_tech: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl GetProjectsUseCase for MockGetProjectsUseCase {
        async fn execute(
            &self,
            tech: Option<String>,
        ) -> Result<Vec<ProjectView>, GetProjectsError> {
            *self.seen_tech.lock().unwrap() = Some(tech);
            self.result.clone()
        }
    }

    fn project_view(title: &str, technologies: &str) -> ProjectView {
        ProjectView {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            technologies: technologies.to_string(),
            tech_list: technologies
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            github_link: String::new(),
            demo_link: String::new(),
            image: None,
            is_featured: false,
            order: 0,
            date_created: NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn get_projects_returns_views() {
        let mut state = test_app_state();
        state.projects.get_list = Arc::new(MockGetProjectsUseCase::success(vec![project_view(
            "Blog",
            "Django, Python",
        )]));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "Blog");
        assert_eq!(body["data"][0]["tech_list"][0], "Django");
    }

    #[actix_web::test]
    async fn get_projects_forwards_tech_parameter() {
        let mock = Arc::new(MockGetProjectsUseCase::success(vec![]));
        let mut state = test_app_state();
        state.projects.get_list = mock.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects?tech=django")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let seen = mock.seen_tech.lock().unwrap().clone().unwrap();
        assert_eq!(seen.as_deref(), Some("django"));
    }

    #[actix_web::test]
    async fn get_projects_query_failure_is_internal_error() {
        let mut state = test_app_state();
        state.projects.get_list = Arc::new(MockGetProjectsUseCase {
            result: Err(GetProjectsError::QueryFailed("db down".to_string())),
            seen_tech: Mutex::new(None),
        });

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
