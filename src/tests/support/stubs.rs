// src/tests/support/stubs.rs
//
// Default use-case stubs backing `test_app_state()` (they panic if a
// route under test unexpectedly reaches them) plus in-memory fakes of
// the read ports for page-service tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteAboutError, DeleteAboutUseCase, GetAboutError, GetAboutUseCase, UpsertAboutError,
    UpsertAboutUseCase,
};
use crate::modules::about::application::ports::outgoing::about_repository::{
    AboutData, AboutRepository, AboutRepositoryError, AboutResult,
};
use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, CreateCertificateUseCase, DeleteCertificateError,
    DeleteCertificateUseCase, GetCertificatesError, GetCertificatesUseCase,
    GetSingleCertificateError, GetSingleCertificateUseCase, UpdateCertificateError,
    UpdateCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::certificate_query::{
    CertificateQuery, CertificateQueryError, CertificateView,
};
use crate::modules::certificate::application::ports::outgoing::certificate_repository::{
    CertificateData, CertificateResult,
};
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase, DeleteEducationError, DeleteEducationUseCase,
    GetEducationError, GetEducationUseCase, GetSingleEducationError, GetSingleEducationUseCase,
    UpdateEducationError, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_query::{
    EducationQuery, EducationQueryError, EducationView,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationResult,
};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, DeleteExperienceError, DeleteExperienceUseCase,
    GetExperiencesError, GetExperiencesUseCase, GetSingleExperienceError,
    GetSingleExperienceUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceData, ExperienceResult,
};
use crate::modules::pages::application::ports::incoming::use_cases::{
    ContactPageView, GetContactPageUseCase, GetHomePageUseCase, GetProjectsPageUseCase,
    GetResumePageUseCase, HomePageView, PageError, ProjectsPageView, ResumePageView,
};
use crate::modules::project::application::domain::entities::distinct_technologies;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectResult,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase,
    GetSingleSkillError, GetSingleSkillUseCase, GetSkillsError, GetSkillsUseCase,
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError, SkillView,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillData, SkillResult,
};

/* --------------------------------------------------
 * Panicking use-case stubs (AppState defaults)
 * -------------------------------------------------- */

macro_rules! stub_use_case {
    ($stub:ident, $trait_:ident, fn execute(&self $(, $arg:ident : $ty:ty)*) -> $ret:ty) => {
        pub struct $stub;

        #[async_trait]
        impl $trait_ for $stub {
            async fn execute(&self $(, $arg: $ty)*) -> $ret {
                unimplemented!("stub use case reached in test")
            }
        }
    };
}

stub_use_case!(StubCreateProject, CreateProjectUseCase,
    fn execute(&self, _data: ProjectData) -> Result<ProjectResult, CreateProjectError>);
stub_use_case!(StubGetProjects, GetProjectsUseCase,
    fn execute(&self, _tech: Option<String>) -> Result<Vec<ProjectView>, GetProjectsError>);
stub_use_case!(StubGetSingleProject, GetSingleProjectUseCase,
    fn execute(&self, _id: Uuid) -> Result<ProjectView, GetSingleProjectError>);
stub_use_case!(StubUpdateProject, UpdateProjectUseCase,
    fn execute(&self, _id: Uuid, _data: ProjectData) -> Result<ProjectResult, UpdateProjectError>);
stub_use_case!(StubDeleteProject, DeleteProjectUseCase,
    fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError>);

stub_use_case!(StubCreateExperience, CreateExperienceUseCase,
    fn execute(&self, _data: ExperienceData) -> Result<ExperienceResult, CreateExperienceError>);
stub_use_case!(StubGetExperiences, GetExperiencesUseCase,
    fn execute(&self) -> Result<Vec<ExperienceView>, GetExperiencesError>);
stub_use_case!(StubGetSingleExperience, GetSingleExperienceUseCase,
    fn execute(&self, _id: Uuid) -> Result<ExperienceView, GetSingleExperienceError>);
stub_use_case!(StubUpdateExperience, UpdateExperienceUseCase,
    fn execute(&self, _id: Uuid, _data: ExperienceData) -> Result<ExperienceResult, UpdateExperienceError>);
stub_use_case!(StubDeleteExperience, DeleteExperienceUseCase,
    fn execute(&self, _id: Uuid) -> Result<(), DeleteExperienceError>);

stub_use_case!(StubCreateEducation, CreateEducationUseCase,
    fn execute(&self, _data: EducationData) -> Result<EducationResult, CreateEducationError>);
stub_use_case!(StubGetEducation, GetEducationUseCase,
    fn execute(&self) -> Result<Vec<EducationView>, GetEducationError>);
stub_use_case!(StubGetSingleEducation, GetSingleEducationUseCase,
    fn execute(&self, _id: Uuid) -> Result<EducationView, GetSingleEducationError>);
stub_use_case!(StubUpdateEducation, UpdateEducationUseCase,
    fn execute(&self, _id: Uuid, _data: EducationData) -> Result<EducationResult, UpdateEducationError>);
stub_use_case!(StubDeleteEducation, DeleteEducationUseCase,
    fn execute(&self, _id: Uuid) -> Result<(), DeleteEducationError>);

stub_use_case!(StubCreateCertificate, CreateCertificateUseCase,
    fn execute(&self, _data: CertificateData) -> Result<CertificateResult, CreateCertificateError>);
stub_use_case!(StubGetCertificates, GetCertificatesUseCase,
    fn execute(&self) -> Result<Vec<CertificateView>, GetCertificatesError>);
stub_use_case!(StubGetSingleCertificate, GetSingleCertificateUseCase,
    fn execute(&self, _id: Uuid) -> Result<CertificateView, GetSingleCertificateError>);
stub_use_case!(StubUpdateCertificate, UpdateCertificateUseCase,
    fn execute(&self, _id: Uuid, _data: CertificateData) -> Result<CertificateResult, UpdateCertificateError>);
stub_use_case!(StubDeleteCertificate, DeleteCertificateUseCase,
    fn execute(&self, _id: Uuid) -> Result<(), DeleteCertificateError>);

stub_use_case!(StubCreateSkill, CreateSkillUseCase,
    fn execute(&self, _data: SkillData) -> Result<SkillResult, CreateSkillError>);
stub_use_case!(StubGetSkills, GetSkillsUseCase,
    fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError>);
stub_use_case!(StubGetSingleSkill, GetSingleSkillUseCase,
    fn execute(&self, _id: Uuid) -> Result<SkillView, GetSingleSkillError>);
stub_use_case!(StubUpdateSkill, UpdateSkillUseCase,
    fn execute(&self, _id: Uuid, _data: SkillData) -> Result<SkillResult, UpdateSkillError>);
stub_use_case!(StubDeleteSkill, DeleteSkillUseCase,
    fn execute(&self, _id: Uuid) -> Result<(), DeleteSkillError>);

stub_use_case!(StubGetAbout, GetAboutUseCase,
    fn execute(&self) -> Result<AboutResult, GetAboutError>);
stub_use_case!(StubUpsertAbout, UpsertAboutUseCase,
    fn execute(&self, _data: AboutData) -> Result<AboutResult, UpsertAboutError>);

/// Deleting the singleton always fails, so the stub mirrors the real
/// behavior instead of panicking.
pub struct StubDeleteAbout;

#[async_trait]
impl DeleteAboutUseCase for StubDeleteAbout {
    async fn execute(&self) -> Result<(), DeleteAboutError> {
        Err(DeleteAboutError::SingletonViolation)
    }
}

stub_use_case!(StubHomePage, GetHomePageUseCase,
    fn execute(&self) -> Result<HomePageView, PageError>);
stub_use_case!(StubProjectsPage, GetProjectsPageUseCase,
    fn execute(&self, _tech: Option<String>) -> Result<ProjectsPageView, PageError>);
stub_use_case!(StubResumePage, GetResumePageUseCase,
    fn execute(&self) -> Result<ResumePageView, PageError>);
stub_use_case!(StubContactPage, GetContactPageUseCase,
    fn execute(&self) -> Result<ContactPageView, PageError>);

/* --------------------------------------------------
 * In-memory read-port fakes (page-service tests)
 * -------------------------------------------------- */

pub struct StubAboutRepository {
    result: AboutResult,
}

impl StubAboutRepository {
    pub fn with(result: AboutResult) -> Self {
        Self { result }
    }
}

#[async_trait]
impl AboutRepository for StubAboutRepository {
    async fn get_or_create(&self) -> Result<AboutResult, AboutRepositoryError> {
        Ok(self.result.clone())
    }

    async fn upsert(&self, _data: AboutData) -> Result<AboutResult, AboutRepositoryError> {
        Ok(self.result.clone())
    }
}

pub struct StubProjectQuery {
    views: Vec<ProjectView>,
}

impl StubProjectQuery {
    pub fn with(views: Vec<ProjectView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl ProjectQuery for StubProjectQuery {
    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        // Mirrors the adapter's ILIKE semantics
        let views = match filter.tech {
            Some(tech) => {
                let needle = tech.to_lowercase();
                self.views
                    .iter()
                    .filter(|v| v.technologies.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => self.views.clone(),
        };

        Ok(views)
    }

    async fn list_featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError> {
        Ok(self
            .views
            .iter()
            .filter(|v| v.is_featured)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn distinct_technologies(&self) -> Result<Vec<String>, ProjectQueryError> {
        Ok(distinct_technologies(
            self.views.iter().map(|v| v.technologies.as_str()),
        ))
    }
}

pub struct StubExperienceQuery {
    views: Vec<ExperienceView>,
}

impl StubExperienceQuery {
    pub fn with(views: Vec<ExperienceView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl ExperienceQuery for StubExperienceQuery {
    async fn get_by_id(&self, id: Uuid) -> Result<ExperienceView, ExperienceQueryError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(ExperienceQueryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        Ok(self.views.clone())
    }
}

pub struct StubEducationQuery {
    views: Vec<EducationView>,
}

impl StubEducationQuery {
    pub fn with(views: Vec<EducationView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl EducationQuery for StubEducationQuery {
    async fn get_by_id(&self, id: Uuid) -> Result<EducationView, EducationQueryError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(EducationQueryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<EducationView>, EducationQueryError> {
        Ok(self.views.clone())
    }
}

pub struct StubCertificateQuery {
    views: Vec<CertificateView>,
}

impl StubCertificateQuery {
    pub fn with(views: Vec<CertificateView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl CertificateQuery for StubCertificateQuery {
    async fn get_by_id(&self, id: Uuid) -> Result<CertificateView, CertificateQueryError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(CertificateQueryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<CertificateView>, CertificateQueryError> {
        Ok(self.views.clone())
    }
}

pub struct StubSkillQuery {
    views: Vec<SkillView>,
}

impl StubSkillQuery {
    pub fn with(views: Vec<SkillView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl SkillQuery for StubSkillQuery {
    async fn get_by_id(&self, id: Uuid) -> Result<SkillView, SkillQueryError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(SkillQueryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError> {
        Ok(self.views.clone())
    }
}
