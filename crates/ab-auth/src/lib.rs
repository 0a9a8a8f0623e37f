pub mod credential_store;
pub mod error;
pub mod preference_store;

pub use credential_store::{
    ACTIVE_SESSION_NAMESPACE, CredentialStore, EMAIL_KEY, PASSWORD_KEY,
};
pub use error::{AuthError, Result};
pub use preference_store::PreferenceStore;
