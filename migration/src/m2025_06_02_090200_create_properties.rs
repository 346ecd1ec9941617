//! Migration to create the properties table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Address).text().not_null())
                    .col(ColumnDef::new(Properties::Neighborhood).text().not_null())
                    .col(ColumnDef::new(Properties::OwnerAgency).text().not_null())
                    .col(ColumnDef::new(Properties::City).text().not_null())
                    .col(ColumnDef::new(Properties::ListingType).text().not_null())
                    .col(ColumnDef::new(Properties::PropertyType).text().not_null())
                    .col(ColumnDef::new(Properties::Price).big_integer().not_null())
                    .col(ColumnDef::new(Properties::Rooms).integer().not_null())
                    .col(ColumnDef::new(Properties::Bathrooms).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::CommissionPct)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::DeedType).text().not_null())
                    .col(
                        ColumnDef::new(Properties::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Properties::Highlights).text().not_null())
                    .col(ColumnDef::new(Properties::CoveredAreaM2).integer().not_null())
                    .col(ColumnDef::new(Properties::TotalAreaM2).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_address")
                    .table(Properties::Table)
                    .col(Properties::Address)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_properties_address").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Address,
    Neighborhood,
    OwnerAgency,
    City,
    ListingType,
    PropertyType,
    Price,
    Rooms,
    Bathrooms,
    CommissionPct,
    Description,
    DeedType,
    IsAvailable,
    Highlights,
    CoveredAreaM2,
    TotalAreaM2,
    CreatedAt,
    UpdatedAt,
}
