//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "ok")]
    pub status: String,
    /// Name of the answering service
    #[schema(example = "movie-service")]
    pub service: String,
}
