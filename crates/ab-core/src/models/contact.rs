//! Contact entity - a single address book entry.

use serde::{Deserialize, Serialize};

/// One row of the address book table.
///
/// `id` is `None` until the record has been inserted; after that it is the
/// stable identity used by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Written on creation and carried through updates. Nothing filters on it.
    pub is_active: bool,
}

impl Contact {
    /// Create a new, not yet persisted contact.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            is_active: true,
        }
    }

    /// True when any editable field differs from the given values.
    pub fn differs_from(&self, name: &str, email: &str, phone_number: &str) -> bool {
        self.name != name || self.email != email || self.phone_number != phone_number
    }

    /// Copy of this contact with the editable fields replaced, keeping identity
    /// and the active flag.
    pub fn with_fields(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            is_active: self.is_active,
        }
    }
}
