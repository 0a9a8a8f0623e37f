pub mod contact;
pub mod credentials;
pub mod field;
