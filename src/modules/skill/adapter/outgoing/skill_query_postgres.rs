use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::{self as skills, Column, Entity};
use crate::modules::skill::application::domain::entities::proficiency_percentage;
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError, SkillView,
};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<SkillView, SkillQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillQueryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}

fn model_to_view(model: skills::Model) -> SkillView {
    SkillView {
        id: model.id,
        category_label: model.category.label().to_string(),
        proficiency_percentage: proficiency_percentage(model.proficiency),
        name: model.name,
        category: model.category,
        proficiency: model.proficiency,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
