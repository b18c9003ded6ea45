use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ProfileInformation {
    Table,
    CreatedDate,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    CreatedDate,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    CreatedDate,
}

/// Every collection is listed oldest first.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_profile_information_created_date")
                    .table(ProfileInformation::Table)
                    .col(ProfileInformation::CreatedDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_created_date")
                    .table(Projects::Table)
                    .col(Projects::CreatedDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skills_created_date")
                    .table(Skills::Table)
                    .col(Skills::CreatedDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_profile_information_created_date",
            "idx_projects_created_date",
            "idx_skills_created_date",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}
