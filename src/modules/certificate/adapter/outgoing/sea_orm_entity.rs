use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub issuing_organization: String,

    pub issue_date: Date,

    #[sea_orm(nullable)]
    pub expiry_date: Option<Date>,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub credential_id: String,

    #[sea_orm(column_type = "Text", string_len = 500)]
    pub credential_url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificate_image: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_name = "order")]
    pub order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
