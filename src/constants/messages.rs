//! Log and status message constants.

pub const MSG_SERVER_RUNNING: &str = "ok";

pub const USER_SERVICE_NAME: &str = "user-service";
pub const MOVIE_SERVICE_NAME: &str = "movie-service";
