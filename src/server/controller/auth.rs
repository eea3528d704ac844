use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Newly issued token
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = UserService::new(&state.db)
        .with_token_ttl(state.config.token_ttl)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(token.into_dto())))
}
