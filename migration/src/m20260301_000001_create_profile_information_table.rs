use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `profile_information` table and its columns.
#[derive(DeriveIden)]
enum ProfileInformation {
    Table,
    Id,
    CreatedDate,
    UpdatedDate,
    FullName,
    ProfessionalTitle,
    ProfilePicture,
    IntroductoryText,
    CvFileUrl,
    Tagline,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileInformation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileInformation::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfileInformation::CreatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProfileInformation::UpdatedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ProfileInformation::FullName).string().null())
                    .col(ColumnDef::new(ProfileInformation::ProfessionalTitle).string().null())
                    .col(ColumnDef::new(ProfileInformation::ProfilePicture).string().null())
                    .col(ColumnDef::new(ProfileInformation::IntroductoryText).text().null())
                    .col(ColumnDef::new(ProfileInformation::CvFileUrl).string().null())
                    .col(ColumnDef::new(ProfileInformation::Tagline).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileInformation::Table).to_owned())
            .await
    }
}
