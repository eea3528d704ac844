use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleDto {
    Admin,
    Regular,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: RoleDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct CreateUserDto {
    #[validate(email)]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// At least 8 characters with an uppercase letter, a lowercase letter, a digit and
    /// one of `!@#$%^&*`.
    #[validate(length(min = 8), custom(function = "validate_password_strength"))]
    #[schema(example = "Password123!")]
    pub password: String,
    /// Defaults to `REGULAR`. Registering an `ADMIN` requires an admin bearer token.
    pub role: Option<RoleDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct LoginDto {
    #[validate(email)]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_strength");
        err.message = Some(
            "password needs an uppercase letter, a lowercase letter, a digit and one of !@#$%^&*"
                .into(),
        );
        Err(err)
    }
}
