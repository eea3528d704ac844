//! User service for registration, password login and bearer token resolution.
//!
//! Passwords are hashed with Argon2id at default parameters. Login issues an opaque
//! 32-character token stored in `access_token`; the auth guard resolves it back to the
//! user on each request.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use entity::user::Role;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::DEFAULT_TOKEN_TTL_HOURS,
    data::{access_token::AccessTokenRepository, is_unique_violation, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{AccessToken, RegisterUserParams, User},
};

const TOKEN_LENGTH: usize = 32;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    token_ttl: Duration,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance issuing tokens with the default lifetime.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Sets the lifetime of tokens issued by `login` and `login_external`.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Registers a password user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_conflict(&params.email));
        }

        let password_hash = hash_password(&params.password)?;

        let email = params.email.clone();
        let user = repo
            .create(params.email, Some(password_hash), params.role)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    email_conflict(&email)
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!("Registered user {} ({:?})", user.id, user.role);

        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that email
    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// Verifies a password and issues a bearer token.
    ///
    /// Unknown email, password-less account and wrong password all fail with the same
    /// error so callers cannot tell which emails exist.
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Newly issued token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Login rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(stored_hash) = credentials.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, stored_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_token(credentials.user.id).await
    }

    /// Finds or creates a password-less regular user and issues a token.
    ///
    /// For accounts whose identity was established by an external provider. No HTTP
    /// route exposes it: the provider handshake is out of scope, so only an
    /// integration that has already verified the email may call it.
    pub(crate) async fn login_external(&self, email: &str) -> Result<AccessToken, AppError> {
        let repo = UserRepository::new(self.db);

        let user = match repo.find_by_email(email).await? {
            Some(user) => user,
            None => match repo.create(email.to_string(), None, Role::Regular).await {
                Ok(user) => {
                    tracing::info!("Created user {} on first external login", user.id);
                    user
                }
                // Created concurrently by another first login.
                Err(err) if is_unique_violation(&err) => repo
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| InternalError::MissingAfterWrite(format!("User {}", email)))?,
                Err(err) => return Err(err.into()),
            },
        };

        self.issue_token(user.id).await
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token unknown or expired
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        AccessTokenRepository::new(self.db)
            .find_user_by_token(token, Utc::now())
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }

    /// Deletes every expired token. Returns the number removed.
    pub async fn purge_expired_tokens(&self) -> Result<u64, AppError> {
        let deleted = AccessTokenRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?;

        if deleted > 0 {
            tracing::debug!("Purged {} expired access tokens", deleted);
        }

        Ok(deleted)
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin created
    /// - `Ok(None)` - An admin already exists, or the email is taken by a regular user
    pub async fn ensure_bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        if repo.find_by_email(email).await?.is_some() {
            tracing::warn!(
                "Bootstrap admin email {} belongs to an existing non-admin user, skipping",
                email
            );
            return Ok(None);
        }

        let user = self
            .register(RegisterUserParams {
                email: email.to_string(),
                password: password.to_string(),
                role: Role::Admin,
            })
            .await?;

        Ok(Some(user))
    }

    async fn issue_token(&self, user_id: i32) -> Result<AccessToken, AppError> {
        let token = AccessTokenRepository::new(self.db)
            .create(generate_token(), user_id, Utc::now() + self.token_ttl)
            .await?;

        Ok(token)
    }
}

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(format!("User with email {} already exists", email))
}

fn hash_password(password: &str) -> Result<String, InternalError> {
    let mut salt = [0u8; 16];
    rand::rng().fill(&mut salt);
    let salt = SaltString::encode_b64(&salt)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// An unparsable stored hash counts as a mismatch.
fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Generates a 32-character alphanumeric bearer token.
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
