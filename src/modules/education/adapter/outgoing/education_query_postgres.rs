use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::adapter::outgoing::sea_orm_entity::{
    self as education, Column, Entity,
};
use crate::modules::education::application::domain::entities::{duration, is_current};
use crate::modules::education::application::ports::outgoing::education_query::{
    EducationQuery, EducationQueryError, EducationView,
};

#[derive(Clone)]
pub struct EducationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationQuery for EducationQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<EducationView, EducationQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EducationQueryError::NotFound)?;

        Ok(model_to_view(row))
    }

    async fn list(&self) -> Result<Vec<EducationView>, EducationQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}

fn model_to_view(model: education::Model) -> EducationView {
    EducationView {
        id: model.id,
        is_current: is_current(model.end_date),
        duration: duration(model.start_date, model.end_date),
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

fn map_db_err(e: DbErr) -> EducationQueryError {
    EducationQueryError::DatabaseError(e.to_string())
}
