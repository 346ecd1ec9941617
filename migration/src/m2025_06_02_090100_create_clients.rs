//! Migration to create the clients table.
//!
//! Clients are landlords and tenants alike, identified by their tax id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clients::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clients::TaxId).text().not_null())
                    .col(ColumnDef::new(Clients::Name).text().not_null())
                    .col(ColumnDef::new(Clients::Email).text().not_null())
                    .col(ColumnDef::new(Clients::Address).text().not_null())
                    .col(ColumnDef::new(Clients::City).text().not_null())
                    .col(ColumnDef::new(Clients::Province).text().not_null())
                    .col(ColumnDef::new(Clients::MobilePhone).text().null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Clients::UpdatedAt)
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
                    .name("idx_clients_tax_id")
                    .table(Clients::Table)
                    .col(Clients::TaxId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_clients_tax_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    TaxId,
    Name,
    Email,
    Address,
    City,
    Province,
    MobilePhone,
    CreatedAt,
    UpdatedAt,
}
