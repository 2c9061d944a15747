// src/modules/certificate/application/ports/outgoing/certificate_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{self, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateData {
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,

    /// `None` for certificates that never expire.
    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    pub credential_id: String,
    #[serde(default)]
    pub credential_url: String,

    /// Opaque media path; the core never interprets it.
    pub certificate_image: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub order: i32,
}

impl CertificateData {
    pub fn validate(&self) -> Result<(), FieldError> {
        validation::require("title", &self.title)?;
        validation::max_len("title", &self.title, 200)?;
        validation::require("issuing_organization", &self.issuing_organization)?;
        validation::max_len("issuing_organization", &self.issuing_organization, 200)?;
        validation::max_len("credential_id", &self.credential_id, 200)?;
        validation::max_len("credential_url", &self.credential_url, 500)?;
        validation::optional_url("credential_url", &self.credential_url)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateResult {
    pub id: Uuid,
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: String,
    pub credential_url: String,
    pub certificate_image: Option<String>,
    pub description: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn create(
        &self,
        data: CertificateData,
    ) -> Result<CertificateResult, CertificateRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: CertificateData,
    ) -> Result<CertificateResult, CertificateRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
