use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_user_table::User, m20250101_000002_create_movie_table::Movie,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMovie::Table)
                    .if_not_exists()
                    .col(integer(UserMovie::UserId))
                    .col(integer(UserMovie::MovieId))
                    .col(
                        timestamp(UserMovie::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserMovie::UserId)
                            .col(UserMovie::MovieId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_movie_user_id")
                            .from(UserMovie::Table, UserMovie::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_movie_movie_id")
                            .from(UserMovie::Table, UserMovie::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMovie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserMovie {
    Table,
    UserId,
    MovieId,
    CreatedAt,
}
