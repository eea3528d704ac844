use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::resource::CatalogResource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_species::Entity")]
    MovieSpecies,
}

impl Related<super::movie_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieSpecies.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_species::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_species::Relation::Species.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl CatalogResource for Entity {
    type Record = ActiveModel;
    type Link = super::movie_species::Entity;

    fn id_column() -> Self::Column {
        Column::Id
    }

    fn name_column() -> Self::Column {
        Column::Name
    }

    fn url_column() -> Self::Column {
        Column::Url
    }

    fn record(name: String, url: String) -> Self::Record {
        ActiveModel {
            name: ActiveValue::Set(name),
            url: ActiveValue::Set(url),
            ..Default::default()
        }
    }
}
