use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `skills` table and its columns.
#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    CreatedDate,
    UpdatedDate,
    SkillName,
    Category,
    ProficiencyLevel,
    Description,
    YearsExperience,
    IsKeySkill,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Skills::SkillName).string().null())
                    .col(ColumnDef::new(Skills::Category).string().null())
                    .col(ColumnDef::new(Skills::ProficiencyLevel).string().null())
                    .col(ColumnDef::new(Skills::Description).text().null())
                    .col(ColumnDef::new(Skills::YearsExperience).double().null())
                    .col(ColumnDef::new(Skills::IsKeySkill).boolean().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}
