// src/modules/certificate/application/ports/outgoing/certificate_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read-side view; `is_expired` is evaluated against the current date at
/// query time, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateView {
    pub id: Uuid,
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: String,
    pub credential_url: String,
    pub certificate_image: Option<String>,
    pub description: String,
    pub date_display: String,
    pub is_expired: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificateQueryError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Listings come back in the default sort order:
/// (order ASC, issue_date DESC).
#[async_trait]
pub trait CertificateQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<CertificateView, CertificateQueryError>;

    async fn list(&self) -> Result<Vec<CertificateView>, CertificateQueryError>;
}
