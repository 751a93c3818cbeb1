use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerAccounts::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomerAccounts::Username).string().not_null())
                    .col(ColumnDef::new(CustomerAccounts::Password).string().not_null())
                    .col(
                        ColumnDef::new(CustomerAccounts::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CustomerAccounts {
    Table,
    Id,
    Username,
    Password,
    CustomerId,
}
