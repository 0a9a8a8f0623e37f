#![allow(dead_code)]

use ab_app::AccountFlows;
use ab_auth::CredentialStore;
use ab_db::AccountDatabases;

use std::sync::Arc;

use tempfile::TempDir;

pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "secret1";

/// Flows backed by a throwaway data directory.
pub struct TestApp {
    pub temp_dir: TempDir,
    pub flows: AccountFlows,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let flows = Self::flows_at(&temp_dir);
        Self { temp_dir, flows }
    }

    /// A second set of flows over the same directory, as after a restart.
    pub fn restart(&self) -> AccountFlows {
        Self::flows_at(&self.temp_dir)
    }

    /// Flows with `EMAIL` signed up and logged in.
    pub fn signed_up() -> Self {
        let app = Self::new();
        app.flows
            .signup(EMAIL, PASSWORD, PASSWORD)
            .expect("Failed to sign up");
        app
    }

    fn flows_at(temp_dir: &TempDir) -> AccountFlows {
        let credentials = CredentialStore::open(temp_dir.path().join("preferences"));
        let databases = AccountDatabases::new(temp_dir.path().join("databases"));
        AccountFlows::new(credentials, Arc::new(databases))
    }
}
