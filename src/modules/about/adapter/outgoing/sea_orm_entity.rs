use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about")]
pub struct Model {
    // Always 1; the table carries a CHECK (id = 1)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 300)]
    pub tagline: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 254)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub phone: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub location: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub github_url: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub linkedin_url: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub twitter_url: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub website_url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_file: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
