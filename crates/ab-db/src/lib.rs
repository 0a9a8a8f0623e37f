pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::account_databases::AccountDatabases;
pub use error::{DbError, Result};
pub use repositories::contact_repository::ContactRepository;
pub use repositories::live_contacts::{ContactFeed, LiveContacts};
