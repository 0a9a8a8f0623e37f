use ab_app::{AppError, FlowError};
use ab_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Flow {
        #[source]
        source: FlowError,
    },

    #[error("Application error: {source} {location}")]
    App {
        #[source]
        source: AppError,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Contact {id} not found {location}")]
    ContactNotFound { id: i64, location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn contact_not_found(id: i64) -> Self {
        Self::ContactNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line printed to stderr.
    pub fn user_message(&self) -> String {
        match self {
            Self::Flow { source } => source.user_message(),
            Self::ContactNotFound { id, .. } => format!("Contact {id} not found"),
            other => other.to_string(),
        }
    }
}

impl From<FlowError> for CliError {
    fn from(source: FlowError) -> Self {
        Self::Flow { source }
    }
}

impl From<AppError> for CliError {
    #[track_caller]
    fn from(source: AppError) -> Self {
        Self::App {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
