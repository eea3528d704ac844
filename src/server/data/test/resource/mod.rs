use crate::server::{data::resource::ResourceRepository, model::resource::RelationKind};
use entity::prelude::{Character, Planet, Species, Starship, Vehicle};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_movie;
mod insert_or_ignore;
mod rename;
mod replace_for_movie;
