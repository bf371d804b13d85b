use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Username, 50).unique_key())
                    .col(string_len(Users::PasswordHash, 200))
                    .col(string_len(Users::Role, 20))
                    .to_owned(),
            )
            .await?;

        // Create clients table
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(pk_auto(Clients::Id))
                    .col(string_len(Clients::Name, 100))
                    .col(string_len(Clients::Phone, 30))
                    .col(string_len(Clients::City, 50))
                    .to_owned(),
            )
            .await?;

        // Create orders table
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(decimal(Orders::Width).decimal_len(16, 4))
                    .col(decimal(Orders::Height).decimal_len(16, 4))
                    .col(string_len(Orders::Material, 50))
                    .col(string_len(Orders::FurnitureType, 50))
                    .col(decimal(Orders::Price).decimal_len(16, 4))
                    .col(string_len(Orders::Status, 20).default("NEW"))
                    .col(integer(Orders::ClientId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_client")
                            .from(Orders::Table, Orders::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_status")
                    .table(Orders::Table)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Name,
    Phone,
    City,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    Width,
    Height,
    Material,
    FurnitureType,
    Price,
    Status,
    ClientId,
}
