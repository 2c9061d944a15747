use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, DeleteExperienceError, DeleteExperienceUseCase,
    GetExperiencesError, GetExperiencesUseCase, GetSingleExperienceError,
    GetSingleExperienceUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    ExperienceData, ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// One service covers the whole experience CRUD surface; each use-case
/// trait is implemented on it.
pub struct ExperienceService<R, Q>
where
    R: ExperienceRepository,
    Q: ExperienceQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> ExperienceService<R, Q>
where
    R: ExperienceRepository,
    Q: ExperienceQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateExperienceUseCase for ExperienceService<R, Q>
where
    R: ExperienceRepository + Send + Sync,
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceResult, CreateExperienceError> {
        data.validate().map_err(CreateExperienceError::Validation)?;

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetExperiencesUseCase for ExperienceService<R, Q>
where
    R: ExperienceRepository + Send + Sync,
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceView>, GetExperiencesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetExperiencesError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetSingleExperienceUseCase for ExperienceService<R, Q>
where
    R: ExperienceRepository + Send + Sync,
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ExperienceView, GetSingleExperienceError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            ExperienceQueryError::NotFound => GetSingleExperienceError::NotFound,
            ExperienceQueryError::DatabaseError(msg) => GetSingleExperienceError::QueryFailed(msg),
        })
    }
}

#[async_trait]
impl<R, Q> UpdateExperienceUseCase for ExperienceService<R, Q>
where
    R: ExperienceRepository + Send + Sync,
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceResult, UpdateExperienceError> {
        data.validate().map_err(UpdateExperienceError::Validation)?;

        self.repository.update(id, data).await.map_err(|e| match e {
            ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => {
                UpdateExperienceError::RepositoryError(msg)
            }
        })
    }
}

#[async_trait]
impl<R, Q> DeleteExperienceUseCase for ExperienceService<R, Q>
where
    R: ExperienceRepository + Send + Sync,
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ExperienceRepositoryError::NotFound => DeleteExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => {
                DeleteExperienceError::RepositoryError(msg)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /* --------------------------------------------------
     * Mock ports
     * -------------------------------------------------- */

    struct MockRepository {
        result: Result<ExperienceResult, ExperienceRepositoryError>,
    }

    #[async_trait]
    impl ExperienceRepository for MockRepository {
        async fn create(
            &self,
            _data: ExperienceData,
        ) -> Result<ExperienceResult, ExperienceRepositoryError> {
            self.result.clone()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: ExperienceData,
        ) -> Result<ExperienceResult, ExperienceRepositoryError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ExperienceRepositoryError> {
            self.result.clone().map(|_| ())
        }
    }

    struct MockQuery {
        result: Result<Vec<ExperienceView>, ExperienceQueryError>,
    }

    #[async_trait]
    impl ExperienceQuery for MockQuery {
        async fn get_by_id(&self, _id: Uuid) -> Result<ExperienceView, ExperienceQueryError> {
            self.result.clone().map(|mut views| views.remove(0))
        }

        async fn list(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
            self.result.clone()
        }
    }

    fn experience_data() -> ExperienceData {
        ExperienceData {
            company: "Acme Corp".to_string(),
            position: "Backend Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end_date: None,
            description: "Billing pipeline".to_string(),
            achievements: String::new(),
            order: 0,
        }
    }

    fn experience_result() -> ExperienceResult {
        let data = experience_data();
        ExperienceResult {
            id: Uuid::new_v4(),
            company: data.company,
            position: data.position,
            start_date: data.start_date,
            end_date: data.end_date,
            description: data.description,
            achievements: data.achievements,
            order: data.order,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn service(
        repo: Result<ExperienceResult, ExperienceRepositoryError>,
        query: Result<Vec<ExperienceView>, ExperienceQueryError>,
    ) -> ExperienceService<MockRepository, MockQuery> {
        ExperienceService::new(MockRepository { result: repo }, MockQuery { result: query })
    }

    #[tokio::test]
    async fn create_rejects_invalid_data() {
        let svc = service(
            Err(ExperienceRepositoryError::DatabaseError(
                "must not be reached".to_string(),
            )),
            Ok(vec![]),
        );

        let mut data = experience_data();
        data.position = String::new();

        match CreateExperienceUseCase::execute(&svc, data).await {
            Err(CreateExperienceError::Validation(err)) => assert_eq!(err.field, "position"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_returns_stored_row() {
        let svc = service(Ok(experience_result()), Ok(vec![]));

        let result = CreateExperienceUseCase::execute(&svc, experience_data()).await;
        assert_eq!(result.unwrap().company, "Acme Corp");
    }

    #[tokio::test]
    async fn update_maps_not_found() {
        let svc = service(Err(ExperienceRepositoryError::NotFound), Ok(vec![]));

        assert!(matches!(
            UpdateExperienceUseCase::execute(&svc, Uuid::new_v4(), experience_data()).await,
            Err(UpdateExperienceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_maps_not_found() {
        let svc = service(Err(ExperienceRepositoryError::NotFound), Ok(vec![]));

        assert!(matches!(
            DeleteExperienceUseCase::execute(&svc, Uuid::new_v4()).await,
            Err(DeleteExperienceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_maps_query_failure() {
        let svc = service(
            Ok(experience_result()),
            Err(ExperienceQueryError::DatabaseError("db down".to_string())),
        );

        assert!(matches!(
            GetExperiencesUseCase::execute(&svc).await,
            Err(GetExperiencesError::QueryFailed(_))
        ));
    }
}
