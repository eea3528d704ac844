//! Access token factory for creating bearer tokens in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating access tokens with customizable expiry.
pub struct AccessTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> AccessTokenFactory<'a> {
    /// Creates a new AccessTokenFactory with default values.
    ///
    /// Defaults:
    /// - token: 32 characters, unique per call
    /// - expires_at: 1 hour from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("{:0>32}", format!("token{}", next_id())),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the token into the database.
    pub async fn build(self) -> Result<entity::access_token::Model, DbErr> {
        entity::access_token::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid token for the given user.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::access_token::Model, DbErr> {
    AccessTokenFactory::new(db, user_id).build().await
}

/// Creates a token that expired an hour ago.
pub async fn create_expired_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::access_token::Model, DbErr> {
    AccessTokenFactory::new(db, user_id)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await
}
