//! Route table and API documentation.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, HealthDto, MessageDto},
        favorite::{AddFavoriteDto, FavoriteDto},
        movie::{CreateMovieDto, MovieDetailDto, MovieDto, ResourceDto, UpdateMovieDto},
        user::{CreateUserDto, LoginDto, RoleDto, TokenDto, UserDto},
    },
    server::{
        controller::{
            auth::login,
            favorite::{add_favorite, get_favorites, remove_favorite},
            health::health,
            movie::{
                create_movie, delete_movie, get_movie, get_movie_relation, get_movies,
                update_movie,
            },
            user::{create_user, get_user_by_email, get_users},
        },
        model::resource::RelationKind,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie Catalog API"),
    paths(
        crate::server::controller::auth::login,
        crate::server::controller::user::create_user,
        crate::server::controller::user::get_users,
        crate::server::controller::user::get_user_by_email,
        crate::server::controller::movie::get_movies,
        crate::server::controller::movie::get_movie,
        crate::server::controller::movie::get_movie_relation,
        crate::server::controller::movie::create_movie,
        crate::server::controller::movie::update_movie,
        crate::server::controller::movie::delete_movie,
        crate::server::controller::favorite::add_favorite,
        crate::server::controller::favorite::remove_favorite,
        crate::server::controller::favorite::get_favorites,
        crate::server::controller::health::health,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        MessageDto,
        HealthDto,
        MovieDto,
        MovieDetailDto,
        ResourceDto,
        CreateMovieDto,
        UpdateMovieDto,
        RelationKind,
        AddFavoriteDto,
        FavoriteDto,
        RoleDto,
        UserDto,
        CreateUserDto,
        LoginDto,
        TokenDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Bearer token login"),
        (name = "user", description = "User registration and lookup"),
        (name = "movie", description = "Movie catalog"),
        (name = "favorite", description = "Per-user favorite movies"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Builds the application router with every route, the docs UI and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .route("/users", post(create_user).get(get_users))
        .route("/users/{email}", get(get_user_by_email))
        .route("/movies", get(get_movies).post(create_movie))
        .route("/movies/favorite", post(add_favorite))
        .route("/movies/favorite/{movie_id}", delete(remove_favorite))
        .route("/movies/user/favorites", get(get_favorites))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/movies/{id}/{kind}", get(get_movie_relation))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
