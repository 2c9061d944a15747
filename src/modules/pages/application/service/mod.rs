mod contact_page_service;
mod home_page_service;
mod projects_page_service;
mod resume_page_service;

pub use contact_page_service::ContactPageService;
pub use home_page_service::HomePageService;
pub use projects_page_service::ProjectsPageService;
pub use resume_page_service::ResumePageService;
