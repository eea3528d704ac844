use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Characters, planets, starships, vehicles and species share one layout:
/// a display name and the upstream URL as the unique natural key.
fn resource_table<T: IntoIden + Copy + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(Resource::Id))
        .col(string(Resource::Name))
        .col(string_uniq(Resource::Url))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ResourceTable::ALL {
            manager.create_table(resource_table(table)).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ResourceTable::ALL {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum ResourceTable {
    Character,
    Planet,
    Starship,
    Vehicle,
    Species,
}

impl ResourceTable {
    pub const ALL: [ResourceTable; 5] = [
        ResourceTable::Character,
        ResourceTable::Planet,
        ResourceTable::Starship,
        ResourceTable::Vehicle,
        ResourceTable::Species,
    ];
}

#[derive(DeriveIden)]
pub enum Resource {
    Id,
    Name,
    Url,
}
