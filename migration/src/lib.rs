pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_movie_table;
mod m20250101_000003_create_resource_tables;
mod m20250101_000004_create_movie_resource_tables;
mod m20250101_000005_create_user_movie_table;
mod m20250101_000006_create_access_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_movie_table::Migration),
            Box::new(m20250101_000003_create_resource_tables::Migration),
            Box::new(m20250101_000004_create_movie_resource_tables::Migration),
            Box::new(m20250101_000005_create_user_movie_table::Migration),
            Box::new(m20250101_000006_create_access_token_table::Migration),
        ]
    }
}
