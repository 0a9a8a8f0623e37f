use crate::{AddressViewModel, FlowError, FlowResult, LaunchOutcome, Result as AppResult};

use ab_auth::CredentialStore;
use ab_config::Config;
use ab_core::{Credentials, Validator};
use ab_db::AccountDatabases;

use std::sync::Arc;

use log::{info, warn};

/// Login, signup and account lifecycle decisions.
///
/// Inputs are trimmed before they are validated or stored, so the email used
/// as a namespace and database name never carries stray whitespace.
pub struct AccountFlows {
    credentials: CredentialStore,
    databases: Arc<AccountDatabases>,
}

impl AccountFlows {
    pub fn new(credentials: CredentialStore, databases: Arc<AccountDatabases>) -> Self {
        Self {
            credentials,
            databases,
        }
    }

    /// Wire the stores from configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let credentials = CredentialStore::open(config.preferences_dir()?);
        let databases = AccountDatabases::new(config.databases_dir()?)
            .with_max_connections(config.database.max_connections)
            .with_default_filename(config.database.default_filename.clone());

        Ok(Self::new(credentials, Arc::new(databases)))
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn databases(&self) -> &Arc<AccountDatabases> {
        &self.databases
    }

    /// Logged in iff a session is active and its account still exists.
    pub fn launch(&self) -> FlowResult<LaunchOutcome> {
        let Some(session) = self.credentials.active_session()? else {
            return Ok(LaunchOutcome::LoggedOut);
        };

        if self.credentials.account_exists(&session.email)? {
            Ok(LaunchOutcome::LoggedIn {
                email: session.email,
            })
        } else {
            warn!("Active session points at missing account {}", session.email);
            Ok(LaunchOutcome::LoggedOut)
        }
    }

    pub fn login(&self, email: &str, password: &str) -> FlowResult<Credentials> {
        Validator::validate_login(email, password)?;
        let credentials = Credentials::new(email.trim(), password.trim());

        if !self.credentials.account_exists(&credentials.email)? {
            return Err(FlowError::account_not_found(&credentials.email));
        }
        if !self
            .credentials
            .password_matches(&credentials.email, &credentials.password)?
        {
            return Err(FlowError::wrong_password(&credentials.email));
        }

        self.credentials.set_active_session(&credentials)?;
        info!("Logged in {}", credentials.email);
        Ok(credentials)
    }

    pub fn signup(&self, email: &str, password: &str, confirm: &str) -> FlowResult<Credentials> {
        Validator::validate_signup(email, password, confirm)?;
        let credentials = Credentials::new(email.trim(), password.trim());

        if self.credentials.account_exists(&credentials.email)? {
            return Err(FlowError::account_exists(&credentials.email));
        }

        self.credentials
            .set_account(&credentials)
            .map_err(FlowError::signup_failed)?;
        self.credentials
            .set_active_session(&credentials)
            .map_err(FlowError::signup_failed)?;

        info!("Signed up {}", credentials.email);
        Ok(credentials)
    }

    /// The stored password for `email`, if the account has one.
    pub fn forgot_password(&self, email: &str) -> FlowResult<Option<String>> {
        Validator::validate_email(email)?;
        Ok(self.credentials.stored_password(email.trim())?)
    }

    /// Open the logged-in account's contacts.
    pub async fn open_contacts(&self) -> FlowResult<AddressViewModel> {
        let session = self
            .credentials
            .active_session()?
            .ok_or_else(FlowError::not_logged_in)?;

        Ok(AddressViewModel::open(Arc::clone(&self.databases), Some(&session.email)).await?)
    }

    /// Close the account database, then clear the session.
    ///
    /// A front end holding a view-model hands it over so its bridge stops too.
    pub async fn logout(&self, contacts: Option<AddressViewModel>) -> FlowResult<()> {
        match contacts {
            Some(contacts) => {
                contacts.close().await;
            }
            None => {
                let session = self.credentials.active_session()?;
                self.databases
                    .close(session.as_ref().map(|s| s.email.as_str()))
                    .await;
            }
        }

        self.credentials.clear_active_session()?;
        info!("Logged out");
        Ok(())
    }

    /// Clear contacts, close the database, then remove account and session.
    pub async fn delete_account(&self) -> FlowResult<()> {
        let session = self
            .credentials
            .active_session()?
            .ok_or_else(FlowError::not_logged_in)?;

        let contacts =
            AddressViewModel::open(Arc::clone(&self.databases), Some(&session.email)).await?;
        contacts.clear_and_close().await?;

        self.credentials.clear_account(&session.email)?;
        info!("Deleted account {}", session.email);
        Ok(())
    }
}
