use actix_web::{web, HttpResponse};
use log::debug;
use utoipa::OpenApi;

use crate::constants::{ERR_INVALID_INPUT, MOVIE_SERVICE_NAME, MSG_SERVER_RUNNING, USER_SERVICE_NAME};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::{MovieApiDoc, UserApiDoc};

/// Unparseable JSON bodies become a 400 with the generic input message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejected request body: {}", err);
        ApiError::BadRequest(ERR_INVALID_INPUT.to_string()).into()
    })
}

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(user_health_check))
        .route("/api-docs/openapi.json", web::get().to(user_openapi))
        .service(
            web::scope("/api")
                // Auth routes
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(handlers::register))
                        .route("/login", web::post().to(handlers::login)),
                )
                // User routes
                .service(
                    web::scope("/users")
                        .route("", web::get().to(handlers::get_users))
                        .route("/{id}", web::get().to(handlers::get_user))
                        .route("/{id}", web::put().to(handlers::update_user))
                        .route("/{id}", web::delete().to(handlers::delete_user))
                        .route("/{id}/promote", web::post().to(handlers::promote_user)),
                )
                .route("/roles", web::get().to(handlers::get_roles)),
        );
}

pub fn configure_movie_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(movie_health_check))
        .route("/api-docs/openapi.json", web::get().to(movie_openapi))
        .service(
            web::scope("/api/movies")
                .route("", web::get().to(handlers::get_movies))
                .route("", web::post().to(handlers::create_movie))
                // Fixed segments must be registered before /{id}
                .route("/search", web::get().to(handlers::search_movies))
                .route("/genres", web::get().to(handlers::get_genres))
                .route("/{id}", web::get().to(handlers::get_movie))
                .route("/{id}", web::put().to(handlers::update_movie))
                .route("/{id}", web::delete().to(handlers::delete_movie)),
        );
}

fn health(service: &str) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_SERVER_RUNNING.to_string(),
        service: service.to_string(),
    })
}

/// Health check for the user service
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = crate::models::HealthResponse)
    )
)]
pub async fn user_health_check() -> HttpResponse {
    health(USER_SERVICE_NAME)
}

/// Health check for the movie service
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = crate::models::HealthResponse)
    )
)]
pub async fn movie_health_check() -> HttpResponse {
    health(MOVIE_SERVICE_NAME)
}

async fn user_openapi() -> HttpResponse {
    HttpResponse::Ok().json(UserApiDoc::openapi())
}

async fn movie_openapi() -> HttpResponse {
    HttpResponse::Ok().json(MovieApiDoc::openapi())
}
