//! Movie service for catalog CRUD, search and seeding.

use std::sync::Arc;

use bson::oid::ObjectId;
use log::{debug, info};

use crate::constants::{ERR_INVALID_ID, ERR_MOVIE_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{MovieFilter, MovieRequest, MovieResponse, MovieSearchQuery, NewMovie};
use crate::repositories::{MovieRepository, RepoError};
use crate::seed::sample_movies;

fn movie_not_found() -> ApiError {
    ApiError::NotFound(ERR_MOVIE_NOT_FOUND.to_string())
}

fn map_missing(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound => movie_not_found(),
        other => other.into(),
    }
}

/// Parse a 24-character hex id.
pub fn parse_movie_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_ID.to_string()))
}

pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn list(&self) -> Result<Vec<MovieResponse>, ApiError> {
        let movies = self.movies.list().await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn search(&self, query: MovieSearchQuery) -> Result<Vec<MovieResponse>, ApiError> {
        let filter = MovieFilter::new(query.title, query.genre);
        debug!("Searching movies with {:?}", filter);
        let movies = self.movies.search(&filter).await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn genres(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.movies.distinct_genres().await?)
    }

    pub async fn get(&self, id: &str) -> Result<MovieResponse, ApiError> {
        let id = parse_movie_id(id)?;
        self.movies
            .get_by_id(id)
            .await?
            .map(MovieResponse::from)
            .ok_or_else(movie_not_found)
    }

    pub async fn create(&self, req: MovieRequest) -> Result<MovieResponse, ApiError> {
        let movie = self.movies.create(NewMovie::from(req)).await?;
        info!("Created movie {} ({})", movie.id, movie.title);
        Ok(movie.into())
    }

    /// Replace every mutable field. `createdAt` is preserved.
    pub async fn update(&self, id: &str, req: MovieRequest) -> Result<MovieResponse, ApiError> {
        let id = parse_movie_id(id)?;
        let movie = self
            .movies
            .update(id, NewMovie::from(req))
            .await
            .map_err(map_missing)?;
        info!("Updated movie {}", movie.id);
        Ok(movie.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let id = parse_movie_id(id)?;
        self.movies.delete(id).await.map_err(map_missing)?;
        info!("Deleted movie {}", id);
        Ok(())
    }

    /// Insert the sample catalog when the collection is empty. Returns how many were inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, ApiError> {
        if self.movies.count().await? > 0 {
            debug!("Movie collection already populated, skipping seed");
            return Ok(0);
        }

        let samples = sample_movies();
        let total = samples.len();
        for movie in samples {
            self.movies.create(movie).await?;
        }
        info!("Seeded {} sample movies", total);
        Ok(total)
    }
}
