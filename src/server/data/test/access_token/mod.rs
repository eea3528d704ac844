use crate::server::data::access_token::AccessTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_expired;
mod find_user_by_token;
