// src/modules/skill/application/domain/entities.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored as its raw key ("languages", ...); displayed through `label`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[sea_orm(string_value = "languages")]
    Languages,
    #[sea_orm(string_value = "frameworks")]
    Frameworks,
    #[sea_orm(string_value = "tools")]
    Tools,
    #[sea_orm(string_value = "databases")]
    Databases,
    #[sea_orm(string_value = "other")]
    Other,
}

impl SkillCategory {
    /// Human-readable label shown on the resume page.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks & Libraries",
            SkillCategory::Tools => "Tools & Technologies",
            SkillCategory::Databases => "Databases",
            SkillCategory::Other => "Other",
        }
    }
}

/// Proficiency 1..=4 rendered as a bar width.
pub fn proficiency_percentage(proficiency: i32) -> f64 {
    (proficiency as f64 / 4.0) * 100.0
}
