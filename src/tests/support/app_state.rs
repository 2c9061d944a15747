// src/tests/support/app_state.rs

use std::sync::Arc;

use crate::modules::about::application::about_use_cases::AboutUseCases;
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::pages::application::page_use_cases::PageUseCases;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// A fully-stubbed `AppState`; route tests replace just the use case
/// under test.
pub fn test_app_state() -> AppState {
    AppState {
        projects: ProjectUseCases {
            create: Arc::new(StubCreateProject),
            get_list: Arc::new(StubGetProjects),
            get_single: Arc::new(StubGetSingleProject),
            update: Arc::new(StubUpdateProject),
            delete: Arc::new(StubDeleteProject),
        },
        experiences: ExperienceUseCases {
            create: Arc::new(StubCreateExperience),
            get_list: Arc::new(StubGetExperiences),
            get_single: Arc::new(StubGetSingleExperience),
            update: Arc::new(StubUpdateExperience),
            delete: Arc::new(StubDeleteExperience),
        },
        education: EducationUseCases {
            create: Arc::new(StubCreateEducation),
            get_list: Arc::new(StubGetEducation),
            get_single: Arc::new(StubGetSingleEducation),
            update: Arc::new(StubUpdateEducation),
            delete: Arc::new(StubDeleteEducation),
        },
        certificates: CertificateUseCases {
            create: Arc::new(StubCreateCertificate),
            get_list: Arc::new(StubGetCertificates),
            get_single: Arc::new(StubGetSingleCertificate),
            update: Arc::new(StubUpdateCertificate),
            delete: Arc::new(StubDeleteCertificate),
        },
        skills: SkillUseCases {
            create: Arc::new(StubCreateSkill),
            get_list: Arc::new(StubGetSkills),
            get_single: Arc::new(StubGetSingleSkill),
            update: Arc::new(StubUpdateSkill),
            delete: Arc::new(StubDeleteSkill),
        },
        about: AboutUseCases {
            get: Arc::new(StubGetAbout),
            upsert: Arc::new(StubUpsertAbout),
            delete: Arc::new(StubDeleteAbout),
        },
        pages: PageUseCases {
            home: Arc::new(StubHomePage),
            projects: Arc::new(StubProjectsPage),
            resume: Arc::new(StubResumePage),
            contact: Arc::new(StubContactPage),
        },
    }
}
