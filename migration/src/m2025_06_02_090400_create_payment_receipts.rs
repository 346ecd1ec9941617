//! Migration to create the payment_receipts table.
//!
//! Receipts belong to a lease; a receipt is unique per (lease_id,
//! payment_date, period).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentReceipts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentReceipts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaymentReceipts::LeaseId).uuid().not_null())
                    .col(
                        ColumnDef::new(PaymentReceipts::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::PaymentDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentReceipts::Period).text().not_null())
                    .col(
                        ColumnDef::new(PaymentReceipts::InstallmentNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::TotalInstallments)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::ReceiptType)
                            .text()
                            .not_null()
                            .default("installment"),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::Status)
                            .text()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PaymentReceipts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_receipts_lease_id")
                            .from(PaymentReceipts::Table, PaymentReceipts::LeaseId)
                            .to(Leases::Table, Leases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_receipts_lease_date_period")
                    .table(PaymentReceipts::Table)
                    .col(PaymentReceipts::LeaseId)
                    .col(PaymentReceipts::PaymentDate)
                    .col(PaymentReceipts::Period)
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
                    .name("idx_payment_receipts_lease_date_period")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PaymentReceipts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PaymentReceipts {
    Table,
    Id,
    LeaseId,
    Amount,
    PaymentDate,
    Period,
    InstallmentNumber,
    TotalInstallments,
    ReceiptType,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Leases {
    Table,
    Id,
}
