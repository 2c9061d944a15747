use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::adapter::outgoing::sea_orm_entity::{
    self as education, ActiveModel, Column, Entity,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationRepository, EducationRepositoryError, EducationResult,
};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn create(
        &self,
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            institution: Set(data.institution.trim().to_string()),
            degree: Set(data.degree.trim().to_string()),
            field_of_study: Set(data.field_of_study.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            gpa: Set(data.gpa),
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
        data: EducationData,
    ) -> Result<EducationResult, EducationRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            institution: Set(data.institution.trim().to_string()),
            degree: Set(data.degree.trim().to_string()),
            field_of_study: Set(data.field_of_study.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            gpa: Set(data.gpa),
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
            .ok_or(EducationRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_result(model: education::Model) -> EducationResult {
    EducationResult {
        id: model.id,
        institution: model.institution,
        degree: model.degree,
        field_of_study: model.field_of_study,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        gpa: model.gpa,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}
