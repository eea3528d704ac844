use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::resource::MovieLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_species")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub species_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_delete = "Cascade"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::species::Entity",
        from = "Column::SpeciesId",
        to = "super::species::Column::Id",
        on_delete = "Cascade"
    )]
    Species,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Species.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MovieLink for Entity {
    type Record = ActiveModel;

    fn movie_column() -> Self::Column {
        Column::MovieId
    }

    fn resource_column() -> Self::Column {
        Column::SpeciesId
    }

    fn record(movie_id: i32, resource_id: i32) -> Self::Record {
        ActiveModel {
            movie_id: ActiveValue::Set(movie_id),
            species_id: ActiveValue::Set(resource_id),
        }
    }
}
