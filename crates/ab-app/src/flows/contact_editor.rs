use crate::{AddressViewModel, FlowError, FlowResult};

use ab_core::{Contact, Validator};

use log::debug;

/// Save, update and delete decisions of the edit screen.
pub struct ContactEditor<'a> {
    contacts: &'a AddressViewModel,
}

impl<'a> ContactEditor<'a> {
    pub fn new(contacts: &'a AddressViewModel) -> Self {
        Self { contacts }
    }

    /// Validate and insert a new contact. Returns it with its id.
    pub async fn save(&self, name: &str, email: &str, phone_number: &str) -> FlowResult<Contact> {
        Validator::validate_contact(name, email, phone_number)?;

        let mut contact = Contact::new(name.trim(), email.trim(), phone_number.trim());
        contact.id = Some(self.contacts.insert(&contact).await?);

        debug!("Saved contact {:?}", contact.id);
        Ok(contact)
    }

    /// Validate and apply edits to `original`, rejecting edits that change
    /// nothing.
    pub async fn update(
        &self,
        original: &Contact,
        name: &str,
        email: &str,
        phone_number: &str,
    ) -> FlowResult<Contact> {
        Validator::validate_contact(name, email, phone_number)?;

        let (name, email, phone_number) = (name.trim(), email.trim(), phone_number.trim());
        if !original.differs_from(name, email, phone_number) {
            return Err(FlowError::no_change());
        }

        let updated = original.with_fields(name, email, phone_number);
        self.contacts.update(&updated).await?;

        debug!("Updated contact {:?}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, contact: &Contact) -> FlowResult<()> {
        self.contacts.delete(contact).await?;
        debug!("Deleted contact {:?}", contact.id);
        Ok(())
    }
}
