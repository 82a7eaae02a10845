use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::constants::{ERR_INTERNAL, ERR_INVALID_TOKEN, ERR_NOT_FOUND, ERR_USER_CONFLICT};
use crate::repositories::RepoError;
use crate::services::token::TokenError;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Usuario no encontrado")]
    pub error: String,
}

/// Error kinds surfaced by handlers. This is the only place kinds become statuses.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    Validation(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Message exposed to clients. Internal details never leave the process.
    pub fn public_message(&self) -> &str {
        match self {
            ApiError::Validation(message)
            | ApiError::BadRequest(message)
            | ApiError::Conflict(message)
            | ApiError::NotFound(message)
            | ApiError::Unauthorized(message) => message,
            ApiError::Internal(_) => ERR_INTERNAL,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict(_) => ApiError::Conflict(ERR_USER_CONFLICT.to_string()),
            RepoError::NotFound => ApiError::NotFound(ERR_NOT_FOUND.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(detail) => ApiError::Internal(detail),
            _ => ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
