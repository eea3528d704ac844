use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::Role;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{role_from_dto, RegisterUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a user.
///
/// Open to anonymous callers for `REGULAR` accounts. Registering an `ADMIN` requires
/// an admin bearer token.
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - `ADMIN` requested without a valid bearer token
/// - `403 Forbidden` - `ADMIN` requested by a non-admin
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = payload.role.map(role_from_dto).unwrap_or(Role::Regular);

    if role == Role::Admin {
        let _ = AuthGuard::new(&state.db, &headers)
            .require(&[Permission::Admin])
            .await?;
    }

    payload.validate()?;

    let user = UserService::new(&state.db)
        .register(RegisterUserParams {
            email: payload.email,
            password: payload.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List every user.
///
/// # Returns
/// - `200 OK` - Users ordered by ID
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let users = UserService::new(&state.db)
        .find_all()
        .await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user by email.
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let user = UserService::new(&state.db)
        .find_by_email(&email)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
