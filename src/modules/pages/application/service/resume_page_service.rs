use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::about::application::ports::outgoing::about_repository::AboutRepository;
use crate::modules::certificate::application::ports::outgoing::certificate_query::CertificateQuery;
use crate::modules::education::application::ports::outgoing::education_query::EducationQuery;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceQuery;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetResumePageUseCase, PageError, ResumePageView,
};
use crate::modules::skill::application::ports::outgoing::skill_query::{
    group_by_category, SkillQuery,
};

pub struct ResumePageService {
    experiences: Arc<dyn ExperienceQuery>,
    education: Arc<dyn EducationQuery>,
    certificates: Arc<dyn CertificateQuery>,
    skills: Arc<dyn SkillQuery>,
    about: Arc<dyn AboutRepository>,
}

impl ResumePageService {
    pub fn new(
        experiences: Arc<dyn ExperienceQuery>,
        education: Arc<dyn EducationQuery>,
        certificates: Arc<dyn CertificateQuery>,
        skills: Arc<dyn SkillQuery>,
        about: Arc<dyn AboutRepository>,
    ) -> Self {
        Self {
            experiences,
            education,
            certificates,
            skills,
            about,
        }
    }
}

#[async_trait]
impl GetResumePageUseCase for ResumePageService {
    async fn execute(&self) -> Result<ResumePageView, PageError> {
        let experiences = self
            .experiences
            .list()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        let education = self
            .education
            .list()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        let certificates = self
            .certificates
            .list()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        let skills = self
            .skills
            .list()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        let about = self
            .about
            .get_or_create()
            .await
            .map_err(|e| PageError::Failed(e.to_string()))?;

        Ok(ResumePageView {
            experiences,
            education,
            certificates,
            skills_by_category: group_by_category(skills),
            about,
        })
    }
}
