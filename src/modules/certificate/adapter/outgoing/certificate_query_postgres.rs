use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certificate::adapter::outgoing::sea_orm_entity::{
    self as certificates, Column, Entity,
};
use crate::modules::certificate::application::domain::entities::{date_display, is_expired};
use crate::modules::certificate::application::ports::outgoing::certificate_query::{
    CertificateQuery, CertificateQueryError, CertificateView,
};

#[derive(Clone)]
pub struct CertificateQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificateQuery for CertificateQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<CertificateView, CertificateQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CertificateQueryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn list(&self) -> Result<Vec<CertificateView>, CertificateQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_desc(Column::IssueDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}

fn model_to_view(model: certificates::Model) -> CertificateView {
    // Expiry is relative to "now"; evaluated fresh on every read.
    let today = Utc::now().date_naive();

    CertificateView {
        id: model.id,
        date_display: date_display(model.issue_date, model.expiry_date),
        is_expired: is_expired(model.expiry_date, today),
        title: model.title,
        issuing_organization: model.issuing_organization,
        issue_date: model.issue_date,
        expiry_date: model.expiry_date,
        credential_id: model.credential_id,
        credential_url: model.credential_url,
        certificate_image: model.certificate_image,
        description: model.description,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CertificateQueryError {
    CertificateQueryError::DatabaseError(e.to_string())
}
