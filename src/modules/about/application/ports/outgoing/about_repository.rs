// src/modules/about/application/ports/outgoing/about_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, FieldError};

/// Placeholder values used when the row is created lazily on first
/// access.
pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TAGLINE: &str = "Your tagline here";
pub const DEFAULT_BIO: &str = "Your bio here";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutData {
    pub name: String,
    pub tagline: String,
    pub bio: String,

    /// Opaque media path; the core never interprets it.
    pub profile_image: Option<String>,

    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub twitter_url: String,
    #[serde(default)]
    pub website_url: String,

    pub resume_file: Option<String>,
}

impl AboutData {
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("name", &self.name)?;
        validation::max_len("name", &self.name, 200)?;
        validation::require("tagline", &self.tagline)?;
        validation::max_len("tagline", &self.tagline, 300)?;
        validation::require("bio", &self.bio)?;
        validation::email("email", &self.email)?;
        validation::max_len("phone", &self.phone, 50)?;
        validation::max_len("location", &self.location, 200)?;
        validation::max_len("github_url", &self.github_url, 500)?;
        validation::optional_url("github_url", &self.github_url)?;
        validation::max_len("linkedin_url", &self.linkedin_url, 500)?;
        validation::optional_url("linkedin_url", &self.linkedin_url)?;
        validation::max_len("twitter_url", &self.twitter_url, 500)?;
        validation::optional_url("twitter_url", &self.twitter_url)?;
        validation::max_len("website_url", &self.website_url, 500)?;
        validation::optional_url("website_url", &self.website_url)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutResult {
    pub id: i32,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub website_url: String,
    pub resume_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The singleton's guarded write path: there is deliberately no generic
/// `create` or `delete` here.
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Returns the row, creating it with placeholder defaults on first
    /// access. Concurrent first calls must still produce exactly one row.
    async fn get_or_create(&self) -> Result<AboutResult, AboutRepositoryError>;

    /// Overwrites the row in place, creating it first if absent; never
    /// yields a second row.
    async fn upsert(&self, data: AboutData) -> Result<AboutResult, AboutRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_data() -> AboutData {
        AboutData {
            name: "Jane Doe".to_string(),
            tagline: "Rust engineer".to_string(),
            bio: "I build backends.".to_string(),
            profile_image: None,
            email: "jane@example.com".to_string(),
            phone: String::new(),
            location: "Berlin".to_string(),
            github_url: "https://github.com/janedoe".to_string(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            website_url: String::new(),
            resume_file: None,
        }
    }

    #[test]
    fn validate_accepts_complete_profile() {
        assert!(base_data().validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let mut data = base_data();
        data.email = "not-an-email".to_string();
        assert_eq!(data.validate().unwrap_err().field, "email");
    }

    #[test]
    fn validate_rejects_malformed_social_url() {
        let mut data = base_data();
        data.linkedin_url = "linkedin.com/in/janedoe".to_string();
        assert_eq!(data.validate().unwrap_err().field, "linkedin_url");
    }
}
