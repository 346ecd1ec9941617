//! Migration to create the leases table.
//!
//! A lease links one property with a landlord and a tenant (both clients).
//! The composite unique index on (property_id, tenant_id, start_date) is the
//! natural key used by the seeder.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leases::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Leases::PropertyId).uuid().not_null())
                    .col(ColumnDef::new(Leases::LandlordId).uuid().not_null())
                    .col(ColumnDef::new(Leases::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Leases::StartDate).date().not_null())
                    .col(ColumnDef::new(Leases::RentAmount).big_integer().not_null())
                    .col(ColumnDef::new(Leases::UpdateFrequency).text().not_null())
                    .col(ColumnDef::new(Leases::CommissionPct).integer().not_null())
                    .col(ColumnDef::new(Leases::TotalMonths).integer().not_null())
                    .col(ColumnDef::new(Leases::Inventory).text().not_null())
                    .col(
                        ColumnDef::new(Leases::Status)
                            .text()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Leases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Leases::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leases_property_id")
                            .from(Leases::Table, Leases::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leases_landlord_id")
                            .from(Leases::Table, Leases::LandlordId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leases_tenant_id")
                            .from(Leases::Table, Leases::TenantId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leases_property_tenant_start")
                    .table(Leases::Table)
                    .col(Leases::PropertyId)
                    .col(Leases::TenantId)
                    .col(Leases::StartDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_leases_property_tenant_start")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Leases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Leases {
    Table,
    Id,
    PropertyId,
    LandlordId,
    TenantId,
    StartDate,
    RentAmount,
    UpdateFrequency,
    CommissionPct,
    TotalMonths,
    Inventory,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}
