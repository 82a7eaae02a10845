//! Authentication handlers for user registration and login.

use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AuthService;
use crate::validators::{validate_login_request, validate_register_request};

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = crate::models::AuthResponse),
        (status = 400, description = "Validation error or username/email already in use", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_register_request(&body)?;

    let response = auth_service.register(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// Authenticate a user and get a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = crate::models::AuthResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    validate_login_request(&body)?;

    let response = auth_service.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
