use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{
    AuthResponse, HealthResponse, LoginRequest, MovieRequest, MovieResponse, RegisterRequest,
    Role, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "User registration, login and account management. Tokens are HS256 JWTs.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "User authentication endpoints (register, login)"),
        (name = "Users", description = "User management endpoints"),
        (name = "Roles", description = "Role catalog")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::promote_user,
        crate::handlers::get_roles,
        crate::routes::user_health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateUserRequest,
            Role,
            UserResponse,
            AuthResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct UserApiDoc;

/// OpenAPI documentation for the movie catalog service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Service API",
        version = "1.0.0",
        description = "Movie catalog with search by title and genre.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Movies", description = "Movie catalog endpoints")
    ),
    paths(
        crate::handlers::get_movies,
        crate::handlers::search_movies,
        crate::handlers::get_genres,
        crate::handlers::get_movie,
        crate::handlers::create_movie,
        crate::handlers::update_movie,
        crate::handlers::delete_movie,
        crate::routes::movie_health_check
    ),
    components(
        schemas(MovieRequest, MovieResponse, ErrorResponse, HealthResponse)
    )
)]
pub struct MovieApiDoc;
