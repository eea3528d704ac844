use crate::server::data::{is_unique_violation, user::UserRepository};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_credentials_by_email;
