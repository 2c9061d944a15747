use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Comma-separated pseudo-list; parsed at the application boundary
    #[sea_orm(column_type = "Text", string_len = 500)]
    pub technologies: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub github_link: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub demo_link: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    pub is_featured: bool,

    #[sea_orm(column_name = "order")]
    pub order: i32,

    pub date_created: Date,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
