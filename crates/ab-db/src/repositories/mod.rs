pub mod contact_repository;
pub mod live_contacts;
