use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{
    self as experiences, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{
    achievements_list, duration, is_current,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<ExperienceView, ExperienceQueryError> {
        let experience = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceQueryError::NotFound)?;

        Ok(model_to_view(experience))
    }

    async fn list(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}

fn model_to_view(model: experiences::Model) -> ExperienceView {
    ExperienceView {
        id: model.id,
        is_current: is_current(model.end_date),
        duration: duration(model.start_date, model.end_date),
        achievements: achievements_list(&model.achievements),
        company: model.company,
        position: model.position,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
