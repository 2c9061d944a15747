// src/modules/pages/application/ports/incoming/use_cases.rs
//
// Read-only page contexts handed to the presentation collaborator. Each
// page gets exactly the records its template needs, derived display
// values included.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::modules::about::application::ports::outgoing::about_repository::AboutResult;
use crate::modules::certificate::application::ports::outgoing::certificate_query::CertificateView;
use crate::modules::education::application::ports::outgoing::education_query::EducationView;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::skill::application::ports::outgoing::skill_query::SkillCategoryGroup;

#[derive(Debug, Clone, Serialize)]
pub struct HomePageView {
    pub about: AboutResult,
    pub featured_projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPageView {
    pub projects: Vec<ProjectView>,
    pub all_technologies: Vec<String>,
    pub current_tech: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumePageView {
    pub experiences: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub certificates: Vec<CertificateView>,
    pub skills_by_category: Vec<SkillCategoryGroup>,
    pub about: AboutResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPageView {
    pub about: AboutResult,
}

#[derive(Debug, Clone)]
pub enum PageError {
    Failed(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Failed(msg) => write!(f, "page context failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePageView, PageError>;
}

/// `tech` mirrors the `?tech=` query parameter; absent or empty means
/// unfiltered.
#[async_trait]
pub trait GetProjectsPageUseCase: Send + Sync {
    async fn execute(&self, tech: Option<String>) -> Result<ProjectsPageView, PageError>;
}

#[async_trait]
pub trait GetResumePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumePageView, PageError>;
}

#[async_trait]
pub trait GetContactPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactPageView, PageError>;
}
