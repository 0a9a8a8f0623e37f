use ab_core::Contact;

/// Creates a test Contact with sensible defaults
pub fn create_test_contact(name: &str) -> Contact {
    let local = name.to_lowercase().replace(' ', ".");
    Contact::new(name, format!("{local}@example.com"), "555-0100")
}
