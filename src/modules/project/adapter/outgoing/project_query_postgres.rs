use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{self as projects, Column, Entity};
use crate::modules::project::application::domain::entities::{distinct_technologies, tech_list};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectView,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let project = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        Ok(model_to_view(project))
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let mut query = Entity::find();

        // Substring match against the raw column, matching a fragment
        // inside a single technology name as well.
        if let Some(ref tech) = filter.tech {
            let pattern = format!("%{}%", tech);
            query = query.filter(Expr::col(Column::Technologies).ilike(pattern));
        }

        let models = query
            .order_by_asc(Column::Order)
            .order_by_desc(Column::DateCreated)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }

    async fn list_featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let models = Entity::find()
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::Order)
            .order_by_desc(Column::DateCreated)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }

    async fn distinct_technologies(&self) -> Result<Vec<String>, ProjectQueryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;

        Ok(distinct_technologies(
            models.iter().map(|m| m.technologies.as_str()),
        ))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: projects::Model) -> ProjectView {
    let parsed = tech_list(&model.technologies);

    ProjectView {
        id: model.id,
        title: model.title,
        description: model.description,
        tech_list: parsed,
        technologies: model.technologies,
        github_link: model.github_link,
        demo_link: model.demo_link,
        image: model.image,
        is_featured: model.is_featured,
        order: model.order,
        date_created: model.date_created,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(title: &str, technologies: &str, is_featured: bool) -> projects::Model {
        let now = Utc::now().fixed_offset();

        projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            technologies: technologies.to_string(),
            github_link: String::new(),
            demo_link: String::new(),
            image: None,
            is_featured,
            order: 0,
            date_created: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_by_id_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), ProjectQueryError::NotFound));
    }

    #[tokio::test]
    async fn list_parses_tech_list_into_views() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("Blog", "Django, Python ,, ", false)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let views = query.list(ProjectListFilter::default()).await.unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].tech_list, vec!["Django", "Python"]);
        assert_eq!(views[0].technologies, "Django, Python ,, ");
    }

    #[tokio::test]
    async fn distinct_technologies_unions_and_sorts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_model("One", "Python, Django", false),
                mock_model("Two", "python, React", true),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let techs = query.distinct_technologies().await.unwrap();

        assert_eq!(techs, vec!["Django", "Python", "React", "python"]);
    }

    #[tokio::test]
    async fn list_featured_returns_views() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("Star", "Rust", true)]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let views = query.list_featured(3).await.unwrap();

        assert_eq!(views.len(), 1);
        assert!(views[0].is_featured);
    }
}
