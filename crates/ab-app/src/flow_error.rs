use crate::AppError;

use ab_auth::AuthError;
use ab_core::{CoreError, Field};
use ab_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const MSG_ACCOUNT_NOT_FOUND: &str = "Invalid credentials. Register account first.";
pub const MSG_WRONG_PASSWORD: &str = "Invalid password";
pub const MSG_ACCOUNT_EXISTS: &str = "Account already registered with this email.";
pub const MSG_SIGNUP_FAILED: &str = "Failed to signup";
pub const MSG_NO_CHANGE: &str = "There is a no change for update";
pub const MSG_NOT_LOGGED_IN: &str = "Please login first";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong";

/// Outcome of a flow that the user gets to see.
///
/// Every variant maps to exactly one message via [`FlowError::user_message`];
/// infrastructure detail stays in the `source` chain.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid input: {source}")]
    Invalid {
        #[source]
        source: CoreError,
    },

    #[error("No account registered for {email} {location}")]
    AccountNotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Password mismatch for {email} {location}")]
    WrongPassword {
        email: String,
        location: ErrorLocation,
    },

    #[error("Account already registered for {email} {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Signup failed: {source} {location}")]
    SignupFailed {
        #[source]
        source: AppError,
        location: ErrorLocation,
    },

    #[error("Contact unchanged {location}")]
    NoChange { location: ErrorLocation },

    #[error("No active session {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Operation failed: {source} {location}")]
    Failed {
        #[source]
        source: AppError,
        location: ErrorLocation,
    },
}

impl FlowError {
    #[track_caller]
    pub fn account_not_found(email: impl Into<String>) -> Self {
        Self::AccountNotFound {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn wrong_password(email: impl Into<String>) -> Self {
        Self::WrongPassword {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn signup_failed(source: impl Into<AppError>) -> Self {
        Self::SignupFailed {
            source: source.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_change() -> Self {
        Self::NoChange {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text to show the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { source } => source.user_message(),
            Self::AccountNotFound { .. } => MSG_ACCOUNT_NOT_FOUND.to_string(),
            Self::WrongPassword { .. } => MSG_WRONG_PASSWORD.to_string(),
            Self::AccountExists { .. } => MSG_ACCOUNT_EXISTS.to_string(),
            Self::SignupFailed { .. } => MSG_SIGNUP_FAILED.to_string(),
            Self::NoChange { .. } => MSG_NO_CHANGE.to_string(),
            Self::NotLoggedIn { .. } => MSG_NOT_LOGGED_IN.to_string(),
            Self::Failed { .. } => MSG_GENERIC_FAILURE.to_string(),
        }
    }

    /// The field to highlight, for validation failures.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Invalid { source } => source.field(),
            _ => None,
        }
    }
}

impl From<CoreError> for FlowError {
    fn from(source: CoreError) -> Self {
        Self::Invalid { source }
    }
}

impl From<AppError> for FlowError {
    #[track_caller]
    fn from(source: AppError) -> Self {
        Self::Failed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for FlowError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::from(AppError::from(source))
    }
}

impl From<AuthError> for FlowError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::from(AppError::from(source))
    }
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;
