use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{AddFavoriteDto, FavoriteDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::{Favorite, FavoriteOutcome},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a movie to the caller's favorites.
///
/// Adding a movie that is already a favorite succeeds with an informational message.
///
/// # Returns
/// - `201 Created` - Favorite added
/// - `200 OK` - Movie was already a favorite
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No movie with that ID
#[utoipa::path(
    post,
    path = "/movies/favorite",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 200, description = "Movie already in favorites", body = MessageDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    payload.validate()?;

    let outcome = FavoriteService::new(&state.db)
        .add_favorite(user.id, payload.movie_id)
        .await?;

    let status = match outcome {
        FavoriteOutcome::Added => StatusCode::CREATED,
        _ => StatusCode::OK,
    };

    Ok((status, Json(outcome.into_dto())))
}

/// Remove a movie from the caller's favorites.
///
/// Removing a movie that is not a favorite succeeds with an informational message.
///
/// # Returns
/// - `200 OK` - Removed, or was not a favorite
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    delete,
    path = "/movies/favorite/{movie_id}",
    tag = FAVORITE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Outcome message", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let outcome = FavoriteService::new(&state.db)
        .remove_favorite(user.id, movie_id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// List the caller's favorites, oldest first, with each movie expanded.
///
/// # Returns
/// - `200 OK` - Favorites
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/movies/user/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "The caller's favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(user.id)
        .await?;

    let favorites_dto: Vec<FavoriteDto> = favorites.into_iter().map(Favorite::into_dto).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
