//! Create `specialties` table.
//!
//! Rows are never deleted; `is_active = false` marks a soft-deleted specialty.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialties::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialties::Id))
                    .col(string(Specialties::Name))
                    .col(string_null(Specialties::Descriptions))
                    .col(boolean(Specialties::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        // Listing filters on the active flag
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_specialties_is_active")
                    .table(Specialties::Table)
                    .col(Specialties::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Specialties::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Specialties {
    Table,
    Id,
    Name,
    Descriptions,
    IsActive,
}
