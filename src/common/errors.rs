use thiserror::Error;

use crate::models::Collection;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Malformed {collection} row: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid field name '{0}'")]
    InvalidField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Record for {0} has no fields")]
    EmptyRecord(Collection),

    #[error("The request timed out")]
    Timeout,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Nothing is selected to submit against")]
    NoParent,

    #[error("{0}")]
    Invalid(String),

    #[error("Submission failed: {0}")]
    Gateway(#[from] GatewayError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating {0} is outside 1..=5")]
    OutOfRange(i64),

    #[error("Rating '{0}' is not a whole number")]
    NotANumber(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
