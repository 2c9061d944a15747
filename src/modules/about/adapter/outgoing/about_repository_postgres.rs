use async_trait::async_trait;
use chrono::Utc;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::about::adapter::outgoing::sea_orm_entity::{
    self as about, ActiveModel, Column, Entity,
};
use crate::modules::about::application::ports::outgoing::about_repository::{
    AboutData, AboutRepository, AboutRepositoryError, AboutResult, DEFAULT_BIO, DEFAULT_EMAIL,
    DEFAULT_NAME, DEFAULT_TAGLINE,
};

const SINGLETON_ID: i32 = 1;

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_row() -> ActiveModel {
        let now = Utc::now().fixed_offset();

        ActiveModel {
            id: Set(SINGLETON_ID),
            name: Set(DEFAULT_NAME.to_string()),
            tagline: Set(DEFAULT_TAGLINE.to_string()),
            bio: Set(DEFAULT_BIO.to_string()),
            profile_image: Set(None),
            email: Set(DEFAULT_EMAIL.to_string()),
            phone: Set(String::new()),
            location: Set(String::new()),
            github_url: Set(String::new()),
            linkedin_url: Set(String::new()),
            twitter_url: Set(String::new()),
            website_url: Set(String::new()),
            resume_file: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Insert-if-absent: ON CONFLICT DO NOTHING keeps concurrent first
    /// calls from racing into two rows, then the re-select picks up
    /// whichever insert won.
    async fn ensure_row(&self) -> Result<about::Model, AboutRepositoryError> {
        if let Some(row) = Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            return Ok(row);
        }

        Entity::insert(Self::default_row())
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                AboutRepositoryError::DatabaseError("about row missing after insert".to_string())
            })
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn get_or_create(&self) -> Result<AboutResult, AboutRepositoryError> {
        self.ensure_row().await.map(model_to_result)
    }

    async fn upsert(&self, data: AboutData) -> Result<AboutResult, AboutRepositoryError> {
        self.ensure_row().await?;

        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name.trim().to_string()),
            tagline: Set(data.tagline.trim().to_string()),
            bio: Set(data.bio),
            profile_image: Set(data.profile_image),
            email: Set(data.email),
            phone: Set(data.phone),
            location: Set(data.location),
            github_url: Set(data.github_url),
            linkedin_url: Set(data.linkedin_url),
            twitter_url: Set(data.twitter_url),
            website_url: Set(data.website_url),
            resume_file: Set(data.resume_file),
            created_at: NotSet,
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(SINGLETON_ID))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or_else(|| {
                AboutRepositoryError::DatabaseError("about row vanished during upsert".to_string())
            })
    }
}

fn model_to_result(model: about::Model) -> AboutResult {
    AboutResult {
        id: model.id,
        name: model.name,
        tagline: model.tagline,
        bio: model.bio,
        profile_image: model.profile_image,
        email: model.email,
        phone: model.phone,
        location: model.location,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        website_url: model.website_url,
        resume_file: model.resume_file,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}
