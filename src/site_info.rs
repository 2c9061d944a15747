use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::shared::config::SiteConfig;

/// Branding strings for the admin collaborator's chrome; read-only.
#[get("/api/admin/site-info")]
pub async fn site_info(config: web::Data<SiteConfig>) -> impl Responder {
    ApiResponse::success(config.get_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn site_info_returns_branding() {
        let config = SiteConfig {
            site_header: "Portfolio Admin".to_string(),
            site_title: "Portfolio Admin".to_string(),
            index_title: "Welcome to Your Portfolio Admin Panel".to_string(),
        };

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(site_info),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/site-info")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["site_header"], "Portfolio Admin");
    }
}
