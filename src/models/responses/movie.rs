//! Movie response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Movie;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster_image: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub release_date: String,
    pub director: String,
    pub cast: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_hex(),
            title: movie.title,
            description: movie.description,
            poster_image: movie.poster_image,
            genre: movie.genre,
            duration: movie.duration,
            rating: movie.rating,
            release_date: movie.release_date,
            director: movie.director,
            cast: movie.cast,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
