use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single-row table: the CHECK pins every insert to id = 1, so a second
        // row is impossible at the storage level.
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(About::Id).eq(1)),
                    )
                    .col(ColumnDef::new(About::Name).string_len(200).not_null())
                    .col(ColumnDef::new(About::Tagline).string_len(300).not_null())
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::ProfileImage).text())
                    .col(ColumnDef::new(About::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(About::Phone)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(About::Location)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(About::GithubUrl)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(About::LinkedinUrl)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(About::TwitterUrl)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(About::WebsiteUrl)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(About::ResumeFile).text())
                    .col(
                        ColumnDef::new(About::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(About::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Name,
    Tagline,
    Bio,
    ProfileImage,
    Email,
    Phone,
    Location,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    WebsiteUrl,
    ResumeFile,
    CreatedAt,
    UpdatedAt,
}
