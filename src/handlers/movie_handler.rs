//! Movie catalog handlers.

use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::{MovieRequest, MovieSearchQuery};
use crate::services::MovieService;
use crate::validators::validate_movie_request;

/// List all movies, newest first
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "List of movies", body = [crate::models::MovieResponse])
    )
)]
pub async fn get_movies(movie_service: web::Data<MovieService>) -> Result<HttpResponse, ApiError> {
    let movies = movie_service.list().await?;
    Ok(HttpResponse::Ok().json(movies))
}

/// Search movies by title and/or genre
#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = "Movies",
    params(MovieSearchQuery),
    responses(
        (status = 200, description = "Matching movies", body = [crate::models::MovieResponse])
    )
)]
pub async fn search_movies(
    movie_service: web::Data<MovieService>,
    query: web::Query<MovieSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let movies = movie_service.search(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(movies))
}

/// List distinct genres
#[utoipa::path(
    get,
    path = "/api/movies/genres",
    tag = "Movies",
    responses(
        (status = 200, description = "Genres in ascending order", body = [String])
    )
)]
pub async fn get_genres(movie_service: web::Data<MovieService>) -> Result<HttpResponse, ApiError> {
    let genres = movie_service.genres().await?;
    Ok(HttpResponse::Ok().json(genres))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Movie found", body = crate::models::MovieResponse),
        (status = 400, description = "Invalid movie ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "Movie not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let movie = movie_service.get(&path).await?;
    Ok(HttpResponse::Ok().json(movie))
}

/// Create a movie
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "Movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created", body = crate::models::MovieResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_movie(
    movie_service: web::Data<MovieService>,
    body: web::Json<MovieRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_movie_request(&body)?;

    let movie = movie_service.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(movie))
}

/// Replace a movie
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie ID (24 hex characters)")
    ),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = crate::models::MovieResponse),
        (status = 400, description = "Invalid movie ID or validation error", body = crate::errors::ErrorResponse),
        (status = 404, description = "Movie not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
    body: web::Json<MovieRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_movie_request(&body)?;

    let movie = movie_service.update(&path, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(movie))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie ID (24 hex characters)")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 400, description = "Invalid movie ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "Movie not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    movie_service.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
