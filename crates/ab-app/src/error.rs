use ab_auth::AuthError;
use ab_config::ConfigError;
use ab_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Infrastructure failures underneath the flows.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Credentials {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },
}

impl From<DbError> for AppError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for AppError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Credentials {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
