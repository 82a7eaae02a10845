use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use moviesystem::config::UserServiceConfig;
use moviesystem::repositories::{
    user_repository, MySqlRoleRepository, MySqlUserRepository, RoleRepository,
};
use moviesystem::routes;
use moviesystem::services::{AuthService, PasswordHasher, TokenIssuer, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = UserServiceConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;

    let pool = user_repository::connect(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| {
            error!("Failed to connect to MySQL: {}", e);
            io::Error::other(e)
        })?;

    let roles = Arc::new(MySqlRoleRepository::new(pool.clone()));
    roles.ensure_defaults().await.map_err(|e| {
        error!("Failed to seed roles: {}", e);
        io::Error::other(e)
    })?;

    // Initialize services
    let users = Arc::new(MySqlUserRepository::new(pool));
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let auth_service = web::Data::new(AuthService::new(
        users.clone(),
        hasher,
        TokenIssuer::from_config(&config),
    ));
    let user_service = web::Data::new(UserService::new(users, roles, hasher));

    // Start HTTP server
    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting user-service at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .configure(routes::configure_user_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
