//! Error message constants returned to API clients.
//!
//! Messages are in Spanish, matching what the frontend displays verbatim.

// Generic errors
pub const ERR_INVALID_INPUT: &str = "Datos de entrada inválidos";
pub const ERR_INVALID_ID: &str = "ID inválido";
pub const ERR_INTERNAL: &str = "Error interno del servidor";
pub const ERR_NOT_FOUND: &str = "Recurso no encontrado";

// Authentication errors
pub const ERR_INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const ERR_INVALID_TOKEN: &str = "Token inválido o expirado";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const ERR_USERNAME_EXISTS: &str = "El nombre de usuario ya está en uso";
pub const ERR_EMAIL_EXISTS: &str = "El email ya está en uso";
pub const ERR_USER_CONFLICT: &str = "El nombre de usuario o el email ya existe";

// Movie errors
pub const ERR_MOVIE_NOT_FOUND: &str = "Película no encontrada";

// User validation
pub const ERR_USERNAME_TOO_SHORT: &str = "el nombre de usuario debe tener al menos 3 caracteres";
pub const ERR_USERNAME_TOO_LONG: &str = "el nombre de usuario no puede tener más de 50 caracteres";
pub const ERR_USERNAME_REQUIRED: &str = "el nombre de usuario es obligatorio";
pub const ERR_EMAIL_FORMAT: &str = "el email no tiene un formato válido";
pub const ERR_EMAIL_TOO_LONG: &str = "el email no puede tener más de 80 caracteres";
pub const ERR_PASSWORD_TOO_SHORT: &str = "la contraseña debe tener al menos 6 caracteres";
pub const ERR_PASSWORD_TOO_LONG: &str = "la contraseña no puede tener más de 120 caracteres";
pub const ERR_PASSWORD_REQUIRED: &str = "la contraseña es obligatoria";
pub const ERR_FIRST_NAME_TOO_LONG: &str = "el nombre no puede tener más de 50 caracteres";
pub const ERR_LAST_NAME_TOO_LONG: &str = "el apellido no puede tener más de 50 caracteres";

// Movie validation
pub const ERR_TITLE_REQUIRED: &str = "el título es obligatorio";
pub const ERR_TITLE_TOO_LONG: &str = "el título no puede tener más de 200 caracteres";
pub const ERR_DESCRIPTION_REQUIRED: &str = "la descripción es obligatoria";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "la descripción no puede tener más de 1000 caracteres";
pub const ERR_POSTER_REQUIRED: &str = "la imagen del póster es obligatoria";
pub const ERR_GENRE_REQUIRED: &str = "el género es obligatorio";
pub const ERR_DURATION_TOO_SHORT: &str = "la duración debe ser mayor a 0 minutos";
pub const ERR_DURATION_TOO_LONG: &str = "la duración no puede ser mayor a 600 minutos";
pub const ERR_RATING_REQUIRED: &str = "la clasificación es obligatoria";
pub const ERR_RELEASE_DATE_REQUIRED: &str = "la fecha de estreno es obligatoria";
pub const ERR_DIRECTOR_REQUIRED: &str = "el director es obligatorio";
