//! Movie repository for all MongoDB operations on the `movies` collection.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, SubsecRound, Utc};
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use crate::constants::{COLLECTION_MOVIES, POINT_DEADLINE, SCAN_DEADLINE};
use crate::models::{Movie, MovieFilter, NewMovie};
use crate::repositories::{with_deadline, MovieRepository, RepoError};

/// Connect to MongoDB and confirm the server answers before serving traffic.
pub async fn connect(uri: &str, database_name: &str) -> Result<Database, RepoError> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database_name);

    with_deadline(POINT_DEADLINE, async {
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    })
    .await?;

    info!("Connected to MongoDB successfully!");
    Ok(db)
}

/// BSON dates carry milliseconds; trimming keeps returned values equal to re-read ones.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Case-insensitive substring filter. User input is escaped so it never acts as a pattern.
fn build_filter(filter: &MovieFilter) -> Document {
    let mut query = Document::new();
    if let Some(title) = &filter.title {
        query.insert(
            "title",
            doc! { "$regex": regex::escape(title), "$options": "i" },
        );
    }
    if let Some(genre) = &filter.genre {
        query.insert(
            "genre",
            doc! { "$regex": regex::escape(genre), "$options": "i" },
        );
    }
    query
}

/// Repository for movie-related database operations.
#[derive(Clone)]
pub struct MongoMovieRepository {
    collection: Collection<Movie>,
}

impl MongoMovieRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_MOVIES),
        }
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Movie>, RepoError> {
        with_deadline(SCAN_DEADLINE, async {
            let cursor = self
                .collection
                .find(filter)
                .sort(doc! { "createdAt": -1, "_id": -1 })
                .await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    async fn create(&self, movie: NewMovie) -> Result<Movie, RepoError> {
        debug!("Repository: Creating movie {}", movie.title);
        let movie = movie.into_movie(ObjectId::new(), now());
        with_deadline(POINT_DEADLINE, async {
            self.collection.insert_one(&movie).await?;
            Ok(())
        })
        .await?;
        Ok(movie)
    }

    async fn get_by_id(&self, id: ObjectId) -> Result<Option<Movie>, RepoError> {
        debug!("Repository: Finding movie by ID: {}", id);
        with_deadline(POINT_DEADLINE, async {
            Ok(self.collection.find_one(doc! { "_id": id }).await?)
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        self.find_sorted(Document::new()).await
    }

    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepoError> {
        self.find_sorted(build_filter(filter)).await
    }

    async fn update(&self, id: ObjectId, movie: NewMovie) -> Result<Movie, RepoError> {
        debug!("Repository: Updating movie {}", id);
        let update = doc! {
            "$set": {
                "title": movie.title,
                "description": movie.description,
                "posterImage": movie.poster_image,
                "genre": movie.genre,
                "duration": movie.duration,
                "rating": movie.rating,
                "releaseDate": movie.release_date,
                "director": movie.director,
                "cast": movie.cast,
                "updatedAt": bson::DateTime::from_chrono(now()),
            }
        };

        with_deadline(POINT_DEADLINE, async {
            self.collection
                .find_one_and_update(doc! { "_id": id }, update)
                .return_document(ReturnDocument::After)
                .await?
                .ok_or(RepoError::NotFound)
        })
        .await
    }

    async fn delete(&self, id: ObjectId) -> Result<(), RepoError> {
        debug!("Repository: Deleting movie {}", id);
        with_deadline(POINT_DEADLINE, async {
            let result = self.collection.delete_one(doc! { "_id": id }).await?;
            if result.deleted_count == 0 {
                return Err(RepoError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, RepoError> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$genre" } },
            doc! { "$sort": { "_id": 1 } },
        ];

        with_deadline(SCAN_DEADLINE, async {
            let groups: Vec<Document> = self
                .collection
                .aggregate(pipeline)
                .await?
                .try_collect()
                .await?;

            Ok(groups
                .iter()
                .filter_map(|group| group.get_str("_id").ok())
                .filter(|genre| !genre.is_empty())
                .map(str::to_string)
                .collect())
        })
        .await
    }

    async fn count(&self) -> Result<u64, RepoError> {
        with_deadline(POINT_DEADLINE, async {
            Ok(self.collection.count_documents(doc! {}).await?)
        })
        .await
    }
}
