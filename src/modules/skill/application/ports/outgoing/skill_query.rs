// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub category_label: String,
    pub proficiency: i32,
    pub proficiency_percentage: f64,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One resume-page section: a category label with its skills.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategoryGroup {
    pub category: String,
    pub skills: Vec<SkillView>,
}

/// Groups an already-sorted skill list by category label, keeping the
/// order in which each category first appears and each group's members in
/// their incoming order.
pub fn group_by_category(skills: Vec<SkillView>) -> Vec<SkillCategoryGroup> {
    let mut groups: Vec<SkillCategoryGroup> = Vec::new();

    for skill in skills {
        let label = skill.category.label();
        match groups.iter_mut().find(|g| g.category == label) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillCategoryGroup {
                category: label.to_string(),
                skills: vec![skill],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Listings come back in the default sort order:
/// (category ASC by raw key, order ASC, name ASC).
#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<SkillView, SkillQueryError>;

    async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::proficiency_percentage;

    fn skill(name: &str, category: SkillCategory) -> SkillView {
        SkillView {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            category_label: category.label().to_string(),
            proficiency: 3,
            proficiency_percentage: proficiency_percentage(3),
            order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let groups = group_by_category(vec![
            skill("Postgres", SkillCategory::Databases),
            skill("Redis", SkillCategory::Databases),
            skill("Rust", SkillCategory::Languages),
            skill("Git", SkillCategory::Tools),
        ]);

        let labels: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Databases", "Programming Languages", "Tools & Technologies"]
        );
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(groups[0].skills[0].name, "Postgres");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_category(vec![]).is_empty());
    }
}
