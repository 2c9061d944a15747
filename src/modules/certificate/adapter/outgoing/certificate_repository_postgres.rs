use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certificate::adapter::outgoing::sea_orm_entity::{
    self as certificates, ActiveModel, Column, Entity,
};
use crate::modules::certificate::application::ports::outgoing::certificate_repository::{
    CertificateData, CertificateRepository, CertificateRepositoryError, CertificateResult,
};

#[derive(Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn create(
        &self,
        data: CertificateData,
    ) -> Result<CertificateResult, CertificateRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            issuing_organization: Set(data.issuing_organization.trim().to_string()),
            issue_date: Set(data.issue_date),
            expiry_date: Set(data.expiry_date),
            credential_id: Set(data.credential_id),
            credential_url: Set(data.credential_url),
            certificate_image: Set(data.certificate_image),
            description: Set(data.description),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(result))
    }

    async fn update(
        &self,
        id: Uuid,
        data: CertificateData,
    ) -> Result<CertificateResult, CertificateRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            title: Set(data.title.trim().to_string()),
            issuing_organization: Set(data.issuing_organization.trim().to_string()),
            issue_date: Set(data.issue_date),
            expiry_date: Set(data.expiry_date),
            credential_id: Set(data.credential_id),
            credential_url: Set(data.credential_url),
            certificate_image: Set(data.certificate_image),
            description: Set(data.description),
            order: Set(data.order),
            created_at: NotSet,
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CertificateRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_result(model: certificates::Model) -> CertificateResult {
    CertificateResult {
        id: model.id,
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

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}
