use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_date: Option<Date>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_character::Entity")]
    MovieCharacter,
    #[sea_orm(has_many = "super::movie_planet::Entity")]
    MoviePlanet,
    #[sea_orm(has_many = "super::movie_species::Entity")]
    MovieSpecies,
    #[sea_orm(has_many = "super::movie_starship::Entity")]
    MovieStarship,
    #[sea_orm(has_many = "super::movie_vehicle::Entity")]
    MovieVehicle,
    #[sea_orm(has_many = "super::user_movie::Entity")]
    UserMovie,
}

impl Related<super::user_movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserMovie.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_character::Relation::Movie.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_planet::Relation::Movie.def().rev())
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_species::Relation::Species.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_species::Relation::Movie.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_starship::Relation::Movie.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_vehicle::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
