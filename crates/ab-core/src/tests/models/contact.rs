use crate::Contact;

#[test]
fn given_new_contact_when_created_then_unsaved_and_active() {
    let contact = Contact::new("Ada", "ada@example.com", "555-0100");

    assert_eq!(contact.id, None);
    assert_eq!(contact.name, "Ada");
    assert_eq!(contact.email, "ada@example.com");
    assert_eq!(contact.phone_number, "555-0100");
    assert!(contact.is_active);
}

#[test]
fn given_contact_when_compared_then_any_field_change_differs() {
    let contact = Contact::new("Ada", "ada@example.com", "555-0100");

    assert!(!contact.differs_from("Ada", "ada@example.com", "555-0100"));
    assert!(contact.differs_from("Ada L", "ada@example.com", "555-0100"));
    assert!(contact.differs_from("Ada", "ada@example.org", "555-0100"));
    assert!(contact.differs_from("Ada", "ada@example.com", "555-0101"));
}

#[test]
fn given_saved_contact_when_fields_replaced_then_identity_and_flag_kept() {
    let mut contact = Contact::new("Ada", "ada@example.com", "555-0100");
    contact.id = Some(7);
    contact.is_active = false;

    let edited = contact.with_fields("Grace", "grace@example.com", "555-0199");

    assert_eq!(edited.id, Some(7));
    assert!(!edited.is_active);
    assert_eq!(edited.name, "Grace");
    assert_eq!(edited.email, "grace@example.com");
    assert_eq!(edited.phone_number, "555-0199");
}
