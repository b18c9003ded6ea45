use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `projects` table and its columns.
#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    CreatedDate,
    UpdatedDate,
    ProjectName,
    ProjectThumbnail,
    ShortDescription,
    FullDescription,
    TechnologiesUsed,
    LiveDemoUrl,
    GithubRepoUrl,
    CompletionDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Projects::ProjectName).string().null())
                    .col(ColumnDef::new(Projects::ProjectThumbnail).string().null())
                    .col(ColumnDef::new(Projects::ShortDescription).text().null())
                    .col(ColumnDef::new(Projects::FullDescription).text().null())
                    // Comma-separated, matching the content backend's field.
                    .col(ColumnDef::new(Projects::TechnologiesUsed).string().null())
                    .col(ColumnDef::new(Projects::LiveDemoUrl).string().null())
                    .col(ColumnDef::new(Projects::GithubRepoUrl).string().null())
                    .col(ColumnDef::new(Projects::CompletionDate).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
