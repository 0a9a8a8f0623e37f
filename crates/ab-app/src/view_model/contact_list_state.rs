use crate::ListView;

use ab_core::Contact;

/// Observable mirror of the repository's live list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListState {
    pub contacts: Vec<Contact>,
    /// Set once the first snapshot has been received.
    pub loaded: bool,
}

impl ContactListState {
    pub fn loaded(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            loaded: true,
        }
    }

    pub fn view(&self) -> ListView {
        match (self.loaded, self.contacts.len()) {
            (false, _) => ListView::Loading,
            (true, 0) => ListView::Empty,
            (true, count) => ListView::Populated(count),
        }
    }
}
