use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use moviesystem::config::MovieServiceConfig;
use moviesystem::repositories::{movie_repository, MongoMovieRepository};
use moviesystem::routes;
use moviesystem::services::MovieService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = MovieServiceConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;

    let db = movie_repository::connect(&config.mongodb_uri, &config.database_name)
        .await
        .map_err(|e| {
            error!("Failed to connect to MongoDB: {}", e);
            io::Error::other(e)
        })?;

    let movie_service = MovieService::new(Arc::new(MongoMovieRepository::new(&db)));
    if config.seed_movies {
        movie_service.seed_if_empty().await.map_err(|e| {
            error!("Failed to seed movies: {}", e);
            io::Error::other(e)
        })?;
    }
    let movie_service = web::Data::new(movie_service);

    // Start HTTP server
    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting movie-service at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(movie_service.clone())
            .configure(routes::configure_movie_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
