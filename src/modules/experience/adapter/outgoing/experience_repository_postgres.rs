use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{
    self as experiences, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceData, ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(data.company.trim().to_string()),
            position: Set(data.position.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            achievements: Set(data.achievements),
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
        data: ExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            company: Set(data.company.trim().to_string()),
            position: Set(data.position.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            achievements: Set(data.achievements),
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
            .ok_or(ExperienceRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_result(model: experiences::Model) -> ExperienceResult {
    ExperienceResult {
        id: model.id,
        company: model.company,
        position: model.position,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        achievements: model.achievements,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
