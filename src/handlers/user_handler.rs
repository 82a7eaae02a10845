//! User management handlers for CRUD operations and role grants.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::ERR_INVALID_ID;
use crate::errors::ApiError;
use crate::models::UpdateUserRequest;
use crate::services::UserService;
use crate::validators::validate_update_user_request;

/// Parse a numeric user id from the path.
fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        debug!("Rejected user id {:?}", raw);
        ApiError::BadRequest(ERR_INVALID_ID.to_string())
    })
}

/// List all users, newest first
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [crate::models::UserResponse])
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::UserResponse),
        (status = 400, description = "Invalid user ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    let user = user_service.get(id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Update a user's profile
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = crate::models::UserResponse),
        (status = 400, description = "Validation error or username/email already in use", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    validate_update_user_request(&body)?;

    let user = user_service.update(id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    user_service.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Grant the admin role to a user
#[utoipa::path(
    post,
    path = "/api/users/{id}/promote",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User promoted to admin", body = crate::models::UserResponse),
        (status = 400, description = "Invalid user ID", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn promote_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    let user = user_service.promote(id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// List the available roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "All roles ordered by name", body = [crate::models::Role])
    )
)]
pub async fn get_roles(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let roles = user_service.list_roles().await?;
    Ok(HttpResponse::Ok().json(roles))
}
