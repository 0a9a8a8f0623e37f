use crate::{ErrorLocation, Field};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: Field,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid field: {value} {location}")]
    InvalidField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(field: Field, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The field that failed validation, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::InvalidField { .. } => None,
        }
    }

    /// Message suitable for showing to the user (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidField { value, .. } => format!("Unknown field: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
