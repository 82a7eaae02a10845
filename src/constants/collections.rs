//! Store object names.

pub const COLLECTION_MOVIES: &str = "movies";
