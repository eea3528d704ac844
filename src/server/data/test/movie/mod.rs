use crate::server::{
    data::{is_unique_violation, movie::MovieRepository},
    model::{
        movie::{CreateMovieParams, UpdateMovieParams},
        sync::{MovieFields, MovieUpsert},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
mod upsert_by_title;
