pub use sea_orm_migration::prelude::*;

mod m20260805_101500_create_table_projects;
mod m20260805_101600_create_table_experiences;
mod m20260805_101700_create_table_education;
mod m20260805_101800_create_table_certificates;
mod m20260805_101900_create_table_skills;
mod m20260805_102000_create_table_about;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_101500_create_table_projects::Migration),
            Box::new(m20260805_101600_create_table_experiences::Migration),
            Box::new(m20260805_101700_create_table_education::Migration),
            Box::new(m20260805_101800_create_table_certificates::Migration),
            Box::new(m20260805_101900_create_table_skills::Migration),
            Box::new(m20260805_102000_create_table_about::Migration),
        ]
    }
}
