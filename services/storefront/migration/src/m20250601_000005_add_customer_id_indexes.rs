use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(CustomerAccounts::Table)
                    .col(CustomerAccounts::CustomerId)
                    .name("idx_customer_accounts_customer_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .name("idx_orders_customer_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_customer_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_customer_accounts_customer_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum CustomerAccounts {
    Table,
    CustomerId,
}

#[derive(Iden)]
enum Orders {
    Table,
    CustomerId,
}
