//! Bearer token repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{AccessToken, User};

pub struct AccessTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly issued token.
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - The stored token
    /// - `Err(DbErr)` - Database error, including a primary key collision
    pub async fn create(
        &self,
        token: String,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<AccessToken, DbErr> {
        let entity = entity::access_token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(self.db)
        .await?;

        Ok(AccessToken::from_entity(entity))
    }

    /// Resolves an unexpired token to its user.
    ///
    /// # Arguments
    /// - `token` - Bearer token presented by the client
    /// - `now` - Reference time for the expiry check
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token exists, has not expired, and its user exists
    /// - `Ok(None)` - Token unknown or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let row = entity::prelude::AccessToken::find_by_id(token.to_string())
            .filter(entity::access_token::Column::ExpiresAt.gt(now))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(_, user)| user).map(User::from_entity))
    }

    /// Deletes every token that expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
