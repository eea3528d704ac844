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
        movie::{CreateMovieDto, MovieDetailDto, MovieDto, ResourceDto, UpdateMovieDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            movie::{CreateMovieParams, UpdateMovieParams},
            resource::{RelationKind, Resource},
        },
        service::movie::MovieService,
        state::AppState,
    },
};

/// Tag for grouping movie endpoints in OpenAPI documentation
pub static MOVIE_TAG: &str = "movie";

/// List every movie.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Movies ordered by ID, without relations
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/movies",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "All movies", body = Vec<MovieDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_movies(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let movies = MovieService::new(&state.db).find_all().await?;

    let movies_dto: Vec<MovieDto> = movies.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(movies_dto)))
}

/// Get one movie with characters, planets, starships, vehicles and species expanded.
///
/// # Returns
/// - `200 OK` - Movie with relations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No movie with that ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie with relations", body = MovieDetailDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let movie = MovieService::new(&state.db).find_by_id(id).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Get one relation category of a movie.
///
/// # Returns
/// - `200 OK` - Resources of the requested category
/// - `400 Bad Request` - Unknown category
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No movie with that ID
#[utoipa::path(
    get,
    path = "/movies/{id}/{kind}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID"),
        ("kind" = RelationKind, Path, description = "Relation category")
    ),
    responses(
        (status = 200, description = "Resources of the category", body = Vec<ResourceDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_movie_relation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, kind)): Path<(i32, RelationKind)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let resources = MovieService::new(&state.db).get_relation(id, kind).await?;

    let resources_dto: Vec<ResourceDto> = resources.into_iter().map(Resource::into_dto).collect();

    Ok((StatusCode::OK, Json(resources_dto)))
}

/// Create a movie.
///
/// # Access Control
/// - `Admin` - Only admins can create movies
///
/// # Returns
/// - `201 Created` - The created movie
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Title already exists
#[utoipa::path(
    post,
    path = "/movies",
    tag = MOVIE_TAG,
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Movie created", body = MovieDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Title already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMovieDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let movie = MovieService::new(&state.db)
        .create(CreateMovieParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(movie.into_dto())))
}

/// Partially update a movie. Omitted fields keep their stored value.
///
/// # Access Control
/// - `Admin` - Only admins can update movies
///
/// # Returns
/// - `200 OK` - The updated movie
/// - `400 Bad Request` - Validation failed or no field provided
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No movie with that ID
/// - `409 Conflict` - New title belongs to another movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Movie updated", body = MovieDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 409, description = "Title already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMovieDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let params = UpdateMovieParams::from_dto(payload);
    if params.is_empty() {
        return Err(AppError::BadRequest(
            "At least one field must be provided".to_string(),
        ));
    }

    let movie = MovieService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Delete a movie. Its relation rows and favorites are removed with it.
///
/// # Access Control
/// - `Admin` - Only admins can delete movies
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No movie with that ID
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !MovieService::new(&state.db).remove(id).await? {
        return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Movie with ID {} has been deleted", id),
        }),
    ))
}
