use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessToken::Table)
                    .if_not_exists()
                    .col(string(AccessToken::Token).primary_key())
                    .col(integer(AccessToken::UserId))
                    .col(
                        timestamp(AccessToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp(AccessToken::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_token_user_id")
                            .from(AccessToken::Table, AccessToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_token_expires_at")
                    .table(AccessToken::Table)
                    .col(AccessToken::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessToken {
    Table,
    Token,
    UserId,
    CreatedAt,
    ExpiresAt,
}
