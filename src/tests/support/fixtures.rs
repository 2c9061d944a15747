// src/tests/support/fixtures.rs
//
// Shared view/result constructors for route and page-service tests.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::about::application::ports::outgoing::about_repository::{
    AboutResult, DEFAULT_BIO, DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_TAGLINE,
};
use crate::modules::certificate::application::domain::entities as certificate_domain;
use crate::modules::certificate::application::ports::outgoing::certificate_query::CertificateView;
use crate::modules::education::application::domain::entities as education_domain;
use crate::modules::education::application::ports::outgoing::education_query::EducationView;
use crate::modules::experience::application::domain::entities as experience_domain;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::project::application::domain::entities::tech_list;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::skill::application::domain::entities::{
    proficiency_percentage, SkillCategory,
};
use crate::modules::skill::application::ports::outgoing::skill_query::SkillView;

pub fn about_result() -> AboutResult {
    AboutResult {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        tagline: DEFAULT_TAGLINE.to_string(),
        bio: DEFAULT_BIO.to_string(),
        profile_image: None,
        email: DEFAULT_EMAIL.to_string(),
        phone: String::new(),
        location: String::new(),
        github_url: String::new(),
        linkedin_url: String::new(),
        twitter_url: String::new(),
        website_url: String::new(),
        resume_file: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn project_view(title: &str, technologies: &str, is_featured: bool) -> ProjectView {
    ProjectView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "desc".to_string(),
        tech_list: tech_list(technologies),
        technologies: technologies.to_string(),
        github_link: String::new(),
        demo_link: String::new(),
        image: None,
        is_featured,
        order: 0,
        date_created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn experience_view(company: &str) -> ExperienceView {
    let start_date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();

    ExperienceView {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: "Backend Engineer".to_string(),
        start_date,
        end_date: None,
        description: "desc".to_string(),
        achievements: vec![],
        is_current: experience_domain::is_current(None),
        duration: experience_domain::duration(start_date, None),
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn education_view(institution: &str) -> EducationView {
    let start_date = NaiveDate::from_ymd_opt(2019, 9, 1).unwrap();
    let end_date = Some(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());

    EducationView {
        id: Uuid::new_v4(),
        institution: institution.to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        start_date,
        end_date,
        description: String::new(),
        gpa: String::new(),
        is_current: education_domain::is_current(end_date),
        duration: education_domain::duration(start_date, end_date),
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn certificate_view(title: &str) -> CertificateView {
    let issue_date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

    CertificateView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        issuing_organization: "AWS".to_string(),
        issue_date,
        expiry_date: None,
        credential_id: String::new(),
        credential_url: String::new(),
        certificate_image: None,
        description: String::new(),
        date_display: certificate_domain::date_display(issue_date, None),
        is_expired: false,
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn skill_view(name: &str, category: SkillCategory) -> SkillView {
    SkillView {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        category_label: category.label().to_string(),
        proficiency: 3,
        proficiency_percentage: proficiency_percentage(3),
        order: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
