//! User domain models and parameters.
//!
//! Users carry an email identity and a role. Password hashes never leave the data
//! layer except through `UserCredentials`, which only the login path reads.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::model::user::{RoleDto, TokenDto, UserDto};

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: role_into_dto(self.role),
            created_at: self.created_at,
        }
    }
}

pub fn role_into_dto(role: Role) -> RoleDto {
    match role {
        Role::Admin => RoleDto::Admin,
        Role::Regular => RoleDto::Regular,
    }
}

pub fn role_from_dto(role: RoleDto) -> Role {
    match role {
        RoleDto::Admin => Role::Admin,
        RoleDto::Regular => Role::Regular,
    }
}

/// User together with the stored password hash, if any.
///
/// Externally authenticated accounts have no hash and cannot log in with a password.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: Option<String>,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a password user.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Bearer token issued at login.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub token: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn from_entity(entity: entity::access_token::Model) -> Self {
        Self {
            token: entity.token,
            user_id: entity.user_id,
            expires_at: entity.expires_at,
        }
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.token,
            token_type: "Bearer".to_string(),
            expires_at: self.expires_at,
        }
    }
}
