//! Movie request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::NewMovie;

/// Request payload for creating or replacing a movie
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieRequest {
    #[schema(example = "Avengers: Endgame")]
    pub title: String,
    pub description: String,
    #[schema(example = "https://example.com/avengers-endgame.jpg")]
    pub poster_image: String,
    #[schema(example = "Acción")]
    pub genre: String,
    /// Duration in minutes (1-600)
    #[schema(example = 181)]
    pub duration: i64,
    #[schema(example = "PG-13")]
    pub rating: String,
    #[schema(example = "2019-04-26")]
    pub release_date: String,
    #[schema(example = "Anthony Russo, Joe Russo")]
    pub director: String,
    pub cast: Vec<String>,
}

impl From<MovieRequest> for NewMovie {
    fn from(req: MovieRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            poster_image: req.poster_image,
            genre: req.genre,
            // 1..=600 once validated
            duration: req.duration.clamp(i32::MIN.into(), i32::MAX.into()) as i32,
            rating: req.rating,
            release_date: req.release_date,
            director: req.director,
            cast: req.cast,
        }
    }
}

/// Query parameters for movie search
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchQuery {
    /// Case-insensitive partial match on the title
    pub title: Option<String>,
    /// Case-insensitive partial match on the genre
    pub genre: Option<String>,
}
