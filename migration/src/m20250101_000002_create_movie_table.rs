use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_uniq(Movie::Title))
                    .col(text_null(Movie::Description))
                    .col(date_null(Movie::ReleaseDate))
                    .col(string_null(Movie::Director))
                    .col(string_null(Movie::Producer))
                    .col(integer_null(Movie::EpisodeId))
                    .col(
                        timestamp(Movie::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Movie::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    Table,
    Id,
    Title,
    Description,
    ReleaseDate,
    Director,
    Producer,
    EpisodeId,
    CreatedAt,
    UpdatedAt,
}
