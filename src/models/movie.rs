use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Movie document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub poster_image: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub release_date: String,
    pub director: String,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Mutable movie fields, used for both inserts and full updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub poster_image: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub release_date: String,
    pub director: String,
    pub cast: Vec<String>,
}

impl NewMovie {
    pub fn into_movie(self, id: ObjectId, now: DateTime<Utc>) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            poster_image: self.poster_image,
            genre: self.genre,
            duration: self.duration,
            rating: self.rating,
            release_date: self.release_date,
            director: self.director,
            cast: self.cast,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Optional, case-insensitive partial matches applied by search.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
}

impl MovieFilter {
    pub fn new(title: Option<String>, genre: Option<String>) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            title: clean(title),
            genre: clean(genre),
        }
    }
}
