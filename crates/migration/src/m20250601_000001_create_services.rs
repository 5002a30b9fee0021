//! Create `services` table.
//!
//! One row per hostname/IP pairing offered for sale. Column defaults mirror
//! what the application sets so rows inserted by hand stay valid.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string_len(Services::Hostname, 255).not_null())
                    .col(string_len(Services::IpAddress, 50).not_null())
                    .col(
                        string_len(Services::Status, 50)
                            .not_null()
                            .default("Available"),
                    )
                    .col(
                        timestamp_with_time_zone(Services::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Services::Status).is_in(["Available", "Sold"]))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Id, Hostname, IpAddress, Status, CreatedAt }
