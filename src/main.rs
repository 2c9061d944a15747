pub mod modules;
pub use modules::about;
pub use modules::certificate;
pub use modules::education;
pub use modules::experience;
pub use modules::pages;
pub use modules::project;
pub use modules::skill;
pub mod health;
pub mod shared;
pub mod site_info;

use crate::about::adapter::outgoing::AboutRepositoryPostgres;
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::outgoing::about_repository::AboutRepository;
use crate::about::application::service::AboutService;
use crate::certificate::adapter::outgoing::{CertificateQueryPostgres, CertificateRepositoryPostgres};
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::certificate::application::ports::outgoing::certificate_query::CertificateQuery;
use crate::certificate::application::service::CertificateService;
use crate::education::adapter::outgoing::{EducationQueryPostgres, EducationRepositoryPostgres};
use crate::education::application::education_use_cases::EducationUseCases;
use crate::education::application::ports::outgoing::education_query::EducationQuery;
use crate::education::application::service::EducationService;
use crate::experience::adapter::outgoing::{ExperienceQueryPostgres, ExperienceRepositoryPostgres};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::outgoing::experience_query::ExperienceQuery;
use crate::experience::application::service::ExperienceService;
use crate::pages::application::page_use_cases::PageUseCases;
use crate::pages::application::service::{
    ContactPageService, HomePageService, ProjectsPageService, ResumePageService,
};
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::shared::api::json_config::custom_json_config;
use crate::shared::config::SiteConfig;
use crate::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use crate::skill::application::ports::outgoing::skill_query::SkillQuery;
use crate::skill::application::service::SkillService;
use crate::skill::application::skill_use_cases::SkillUseCases;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectUseCases,
    pub experiences: ExperienceUseCases,
    pub education: EducationUseCases,
    pub certificates: CertificateUseCases,
    pub skills: SkillUseCases,
    pub about: AboutUseCases,
    pub pages: PageUseCases,
}

fn build_app_state(db: Arc<DatabaseConnection>) -> AppState {
    // Project: one service per use case, all over the same two adapters
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));

    let projects = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Resume-section entities: one service each, covering its whole CRUD
    // surface
    let experience_service = Arc::new(ExperienceService::new(
        ExperienceRepositoryPostgres::new(Arc::clone(&db)),
        ExperienceQueryPostgres::new(Arc::clone(&db)),
    ));
    let experiences = ExperienceUseCases {
        create: experience_service.clone(),
        get_list: experience_service.clone(),
        get_single: experience_service.clone(),
        update: experience_service.clone(),
        delete: experience_service,
    };

    let education_service = Arc::new(EducationService::new(
        EducationRepositoryPostgres::new(Arc::clone(&db)),
        EducationQueryPostgres::new(Arc::clone(&db)),
    ));
    let education = EducationUseCases {
        create: education_service.clone(),
        get_list: education_service.clone(),
        get_single: education_service.clone(),
        update: education_service.clone(),
        delete: education_service,
    };

    let certificate_service = Arc::new(CertificateService::new(
        CertificateRepositoryPostgres::new(Arc::clone(&db)),
        CertificateQueryPostgres::new(Arc::clone(&db)),
    ));
    let certificates = CertificateUseCases {
        create: certificate_service.clone(),
        get_list: certificate_service.clone(),
        get_single: certificate_service.clone(),
        update: certificate_service.clone(),
        delete: certificate_service,
    };

    let skill_service = Arc::new(SkillService::new(
        SkillRepositoryPostgres::new(Arc::clone(&db)),
        SkillQueryPostgres::new(Arc::clone(&db)),
    ));
    let skills = SkillUseCases {
        create: skill_service.clone(),
        get_list: skill_service.clone(),
        get_single: skill_service.clone(),
        update: skill_service.clone(),
        delete: skill_service,
    };

    // About singleton
    let about_repo = AboutRepositoryPostgres::new(Arc::clone(&db));
    let about_service = Arc::new(AboutService::new(about_repo.clone()));
    let about = AboutUseCases {
        get: about_service.clone(),
        upsert: about_service.clone(),
        delete: about_service,
    };

    // Page contexts compose the read ports directly
    let about_port: Arc<dyn AboutRepository> = Arc::new(about_repo);
    let project_query_port: Arc<dyn ProjectQuery> = Arc::new(project_query);
    let experience_query_port: Arc<dyn ExperienceQuery> =
        Arc::new(ExperienceQueryPostgres::new(Arc::clone(&db)));
    let education_query_port: Arc<dyn EducationQuery> =
        Arc::new(EducationQueryPostgres::new(Arc::clone(&db)));
    let certificate_query_port: Arc<dyn CertificateQuery> =
        Arc::new(CertificateQueryPostgres::new(Arc::clone(&db)));
    let skill_query_port: Arc<dyn SkillQuery> = Arc::new(SkillQueryPostgres::new(Arc::clone(&db)));

    let pages = PageUseCases {
        home: Arc::new(HomePageService::new(
            about_port.clone(),
            project_query_port.clone(),
        )),
        projects: Arc::new(ProjectsPageService::new(project_query_port)),
        resume: Arc::new(ResumePageService::new(
            experience_query_port,
            education_query_port,
            certificate_query_port,
            skill_query_port,
            about_port.clone(),
        )),
        contact: Arc::new(ContactPageService::new(about_port)),
    };

    AppState {
        projects,
        experiences,
        education,
        certificates,
        skills,
        about,
        pages,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let site_config = SiteConfig::from_env();
    info!("Serving site: {}", site_config.site_title);

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let state = build_app_state(Arc::clone(&db_arc));

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(site_config.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public page contexts
    cfg.service(crate::pages::adapter::incoming::web::routes::home_page_handler);
    cfg.service(crate::pages::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(crate::pages::adapter::incoming::web::routes::resume_page_handler);
    cfg.service(crate::pages::adapter::incoming::web::routes::contact_page_handler);
    // Admin: projects
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Admin: experiences
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_single_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Admin: education
    cfg.service(crate::education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::get_single_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::delete_education_handler);
    // Admin: certificates
    cfg.service(crate::certificate::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::get_certificates_handler);
    cfg.service(
        crate::certificate::adapter::incoming::web::routes::get_single_certificate_handler,
    );
    cfg.service(crate::certificate::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::delete_certificate_handler);
    // Admin: skills
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Admin: about singleton
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::upsert_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::delete_about_handler);
    // Admin: site branding
    cfg.service(crate::site_info::site_info);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
