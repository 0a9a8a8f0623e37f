pub mod error;
pub mod models;
pub mod naming;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::contact::Contact;
pub use models::credentials::Credentials;
pub use models::field::Field;
pub use naming::file_safe_name;
pub use validation::{
    Validator, is_email_valid, is_name_valid, is_password_valid, is_phone_number_valid,
};
