//! Field-level input checks.
//!
//! Every check trims its input first. On failure the returned
//! [`CoreError::Validation`] names the offending [`Field`] and carries the
//! message shown to the user.

use crate::{CoreError, Field, Result as CoreErrorResult};

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// `local@domain.tld`; at least one dotted label after the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern compiles")
});

/// Optional `+country`, optional `(area)`, then digits with `-`, ` ` or `.`
/// separators, starting and ending on a digit.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]+[\- .]*)?(\([0-9]+\)[\- .]*)?([0-9][0-9\- .]+[0-9])$")
        .expect("phone pattern compiles")
});

pub struct Validator;

impl Validator {
    #[track_caller]
    pub fn validate_name(name: &str) -> CoreErrorResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::validation(Field::Name, "Please enter name"));
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_email(email: &str) -> CoreErrorResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CoreError::validation(Field::Email, "Please enter email"));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(CoreError::validation(
                Field::Email,
                "Please enter valid email",
            ));
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_password(password: &str) -> CoreErrorResult<()> {
        Self::check_password(Field::Password, password)
    }

    #[track_caller]
    pub fn validate_phone_number(phone_number: &str) -> CoreErrorResult<()> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(CoreError::validation(
                Field::PhoneNumber,
                "Please enter phone number",
            ));
        }
        if !PHONE_PATTERN.is_match(phone_number) {
            return Err(CoreError::validation(
                Field::PhoneNumber,
                "Please enter valid phone number",
            ));
        }
        Ok(())
    }

    /// Email then password.
    #[track_caller]
    pub fn validate_login(email: &str, password: &str) -> CoreErrorResult<()> {
        Self::validate_email(email)?;
        Self::validate_password(password)
    }

    /// Email, password, confirmation, then the two passwords must agree.
    #[track_caller]
    pub fn validate_signup(email: &str, password: &str, confirm: &str) -> CoreErrorResult<()> {
        Self::validate_email(email)?;
        Self::validate_password(password)?;
        Self::check_password(Field::ConfirmPassword, confirm)?;
        if password.trim() != confirm.trim() {
            return Err(CoreError::validation(
                Field::ConfirmPassword,
                "Password mismatched",
            ));
        }
        Ok(())
    }

    /// Name, email, then phone number.
    #[track_caller]
    pub fn validate_contact(name: &str, email: &str, phone_number: &str) -> CoreErrorResult<()> {
        Self::validate_name(name)?;
        Self::validate_email(email)?;
        Self::validate_phone_number(phone_number)
    }

    #[track_caller]
    fn check_password(field: Field, password: &str) -> CoreErrorResult<()> {
        let password = password.trim();
        if password.is_empty() {
            return Err(CoreError::validation(field, "Please enter password"));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                field,
                "Password must be greater than 6 digits",
            ));
        }
        if password.contains(' ') {
            return Err(CoreError::validation(
                field,
                "Password must not contain space",
            ));
        }
        Ok(())
    }
}

pub fn is_name_valid(name: &str) -> bool {
    Validator::validate_name(name).is_ok()
}

pub fn is_email_valid(email: &str) -> bool {
    Validator::validate_email(email).is_ok()
}

pub fn is_password_valid(password: &str) -> bool {
    Validator::validate_password(password).is_ok()
}

pub fn is_phone_number_valid(phone_number: &str) -> bool {
    Validator::validate_phone_number(phone_number).is_ok()
}
