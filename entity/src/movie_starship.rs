use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::resource::MovieLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_starship")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub starship_id: i32,
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
        belongs_to = "super::starship::Entity",
        from = "Column::StarshipId",
        to = "super::starship::Column::Id",
        on_delete = "Cascade"
    )]
    Starship,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MovieLink for Entity {
    type Record = ActiveModel;

    fn movie_column() -> Self::Column {
        Column::MovieId
    }

    fn resource_column() -> Self::Column {
        Column::StarshipId
    }

    fn record(movie_id: i32, resource_id: i32) -> Self::Record {
        ActiveModel {
            movie_id: ActiveValue::Set(movie_id),
            starship_id: ActiveValue::Set(resource_id),
        }
    }
}
