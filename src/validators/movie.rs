//! Movie request validator.

use crate::constants::{
    DESCRIPTION_MAX_LEN, ERR_DESCRIPTION_REQUIRED, ERR_DESCRIPTION_TOO_LONG,
    ERR_DIRECTOR_REQUIRED, ERR_DURATION_TOO_LONG, ERR_DURATION_TOO_SHORT, ERR_GENRE_REQUIRED,
    ERR_POSTER_REQUIRED, ERR_RATING_REQUIRED, ERR_RELEASE_DATE_REQUIRED, ERR_TITLE_REQUIRED,
    ERR_TITLE_TOO_LONG, MAX_MOVIE_DURATION, TITLE_MAX_LEN,
};
use crate::errors::ApiError;
use crate::models::MovieRequest;
use crate::validators::common::{ensure, max_len, require};

pub fn validate_movie_request(req: &MovieRequest) -> Result<(), ApiError> {
    require(&req.title, ERR_TITLE_REQUIRED)?;
    max_len(&req.title, TITLE_MAX_LEN, ERR_TITLE_TOO_LONG)?;
    require(&req.description, ERR_DESCRIPTION_REQUIRED)?;
    max_len(&req.description, DESCRIPTION_MAX_LEN, ERR_DESCRIPTION_TOO_LONG)?;
    require(&req.poster_image, ERR_POSTER_REQUIRED)?;
    require(&req.genre, ERR_GENRE_REQUIRED)?;
    ensure(req.duration > 0, ERR_DURATION_TOO_SHORT)?;
    ensure(req.duration <= i64::from(MAX_MOVIE_DURATION), ERR_DURATION_TOO_LONG)?;
    require(&req.rating, ERR_RATING_REQUIRED)?;
    require(&req.release_date, ERR_RELEASE_DATE_REQUIRED)?;
    require(&req.director, ERR_DIRECTOR_REQUIRED)
}
