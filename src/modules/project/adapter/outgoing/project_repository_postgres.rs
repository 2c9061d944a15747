use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    self as projects, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(&self, data: ProjectData) -> Result<ProjectResult, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            technologies: Set(data.technologies),
            github_link: Set(data.github_link),
            demo_link: Set(data.demo_link),
            image: Set(data.image),
            is_featured: Set(data.is_featured),
            order: Set(data.order),
            date_created: Set(data.date_created),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(result))
    }

    async fn update(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            technologies: Set(data.technologies),
            github_link: Set(data.github_link),
            demo_link: Set(data.demo_link),
            image: Set(data.image),
            is_featured: Set(data.is_featured),
            order: Set(data.order),
            date_created: Set(data.date_created),
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
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: projects::Model) -> ProjectResult {
    ProjectResult {
        id: model.id,
        title: model.title,
        description: model.description,
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

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn project_data() -> ProjectData {
        ProjectData {
            title: "Weather Dashboard".to_string(),
            description: "Live weather charts".to_string(),
            technologies: "Python, Django, Chart.js".to_string(),
            github_link: "https://github.com/me/weather".to_string(),
            demo_link: String::new(),
            image: None,
            is_featured: true,
            order: 0,
            date_created: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    fn mock_model(id: Uuid, title: &str) -> projects::Model {
        let now = Utc::now().fixed_offset();

        projects::Model {
            id,
            title: title.to_string(),
            description: "Live weather charts".to_string(),
            technologies: "Python, Django, Chart.js".to_string(),
            github_link: "https://github.com/me/weather".to_string(),
            demo_link: String::new(),
            image: None,
            is_featured: true,
            order: 0,
            date_created: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_returns_stored_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, "Weather Dashboard")]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(project_data()).await.unwrap();

        assert_eq!(result.title, "Weather Dashboard");
        assert!(result.is_featured);
    }

    #[tokio::test]
    async fn create_trims_title() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, "Weather Dashboard")]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let mut data = project_data();
        data.title = "  Weather Dashboard  ".to_string();

        let result = repo.create(data).await.unwrap();
        assert_eq!(result.title, "Weather Dashboard");
    }

    #[tokio::test]
    async fn create_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(project_data()).await;

        match result.unwrap_err() {
            ProjectRepositoryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_returns_updated_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, "Renamed Dashboard")]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(id, project_data()).await.unwrap();

        assert_eq!(result.id, id);
        assert_eq!(result.title, "Renamed Dashboard");
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), project_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProjectRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProjectRepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn delete_existing_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
