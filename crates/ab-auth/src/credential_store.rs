use crate::{PreferenceStore, Result as AuthResult};

use ab_core::Credentials;

use std::path::PathBuf;

use log::{debug, info};

/// Namespace holding the credentials of whoever is currently logged in.
pub const ACTIVE_SESSION_NAMESPACE: &str = "activeLoginInfo";
pub const EMAIL_KEY: &str = "email";
pub const PASSWORD_KEY: &str = "password";

/// Account and session credentials on top of [`PreferenceStore`].
///
/// Each account lives in a namespace named by its email. The active session
/// is a second copy of the pair under [`ACTIVE_SESSION_NAMESPACE`]; it is a
/// pointer only and is not re-checked against the account after login.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    preferences: PreferenceStore,
}

impl CredentialStore {
    pub fn new(preferences: PreferenceStore) -> Self {
        Self { preferences }
    }

    /// Store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(PreferenceStore::new(dir))
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Persist the pair under the account namespace. Both keys land in the
    /// same atomic write.
    pub fn set_account(&self, credentials: &Credentials) -> AuthResult<()> {
        Self::write_pair(&self.preferences, &credentials.email, credentials)?;
        info!("Stored account {}", credentials.email);
        Ok(())
    }

    /// True when both the email and the password are stored for `email`.
    pub fn account_exists(&self, email: &str) -> AuthResult<bool> {
        let entries = self.preferences.entries(email)?;
        Ok(entries.contains_key(EMAIL_KEY) && entries.contains_key(PASSWORD_KEY))
    }

    /// False when no password is stored.
    pub fn password_matches(&self, email: &str, candidate: &str) -> AuthResult<bool> {
        Ok(self
            .stored_password(email)?
            .is_some_and(|stored| stored == candidate))
    }

    pub fn stored_password(&self, email: &str) -> AuthResult<Option<String>> {
        self.preferences.get(email, PASSWORD_KEY)
    }

    /// The stored pair, when the account exists.
    pub fn stored_account(&self, email: &str) -> AuthResult<Option<Credentials>> {
        Self::read_pair(&self.preferences, email)
    }

    pub fn set_active_session(&self, credentials: &Credentials) -> AuthResult<()> {
        Self::write_pair(&self.preferences, ACTIVE_SESSION_NAMESPACE, credentials)?;
        debug!("Active session set for {}", credentials.email);
        Ok(())
    }

    /// The logged-in pair, if any.
    pub fn active_session(&self) -> AuthResult<Option<Credentials>> {
        Self::read_pair(&self.preferences, ACTIVE_SESSION_NAMESPACE)
    }

    /// Remove the session pair. The account namespace is left untouched.
    pub fn clear_active_session(&self) -> AuthResult<()> {
        self.preferences
            .remove_all(ACTIVE_SESSION_NAMESPACE, &[EMAIL_KEY, PASSWORD_KEY])?;
        debug!("Active session cleared");
        Ok(())
    }

    /// Clear the session, then the account namespace. Stops at the first
    /// failure.
    pub fn clear_account(&self, email: &str) -> AuthResult<()> {
        self.clear_active_session()?;
        self.preferences.clear(email)?;
        info!("Removed account {email}");
        Ok(())
    }

    fn write_pair(
        preferences: &PreferenceStore,
        namespace: &str,
        credentials: &Credentials,
    ) -> AuthResult<()> {
        preferences.put_all(
            namespace,
            &[
                (EMAIL_KEY, credentials.email.as_str()),
                (PASSWORD_KEY, credentials.password.as_str()),
            ],
        )
    }

    fn read_pair(preferences: &PreferenceStore, namespace: &str) -> AuthResult<Option<Credentials>> {
        let mut entries = preferences.entries(namespace)?;
        match (entries.remove(EMAIL_KEY), entries.remove(PASSWORD_KEY)) {
            (Some(email), Some(password)) => Ok(Some(Credentials::new(email, password))),
            _ => Ok(None),
        }
    }
}
