use crate::{ContactListState, ListView, Result as AppResult};

use ab_core::Contact;
use ab_db::{AccountDatabases, ContactRepository};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

/// Bridges one account's contact table into observable list state.
///
/// [`load_contacts`](Self::load_contacts) starts a background task that
/// copies every repository snapshot into the state channel. Subscribers get a
/// `watch::Receiver`; dropping it unregisters.
pub struct AddressViewModel {
    databases: Arc<AccountDatabases>,
    account: Option<String>,
    repository: ContactRepository,
    state: Arc<watch::Sender<ContactListState>>,
    bridge: Mutex<Option<JoinHandle<()>>>,
}

impl AddressViewModel {
    /// Open the database for `account` (the default file when `None`).
    pub async fn open(databases: Arc<AccountDatabases>, account: Option<&str>) -> AppResult<Self> {
        let repository = databases.contacts(account).await?;
        let (state, _) = watch::channel(ContactListState::default());

        Ok(Self {
            databases,
            account: account.map(str::to_string),
            repository,
            state: Arc::new(state),
            bridge: Mutex::new(None),
        })
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Start mirroring the live list. Calling it again while running is a
    /// no-op.
    pub async fn load_contacts(&self) -> AppResult<()> {
        let mut bridge = self.bridge.lock().await;
        if bridge.as_ref().is_some_and(|task| !task.is_finished()) {
            return Ok(());
        }

        let mut live = self.repository.watch().await?;
        self.state.send_replace(ContactListState::loaded(live.current()));

        let state = Arc::clone(&self.state);
        *bridge = Some(tokio::spawn(async move {
            while let Some(contacts) = live.changed().await {
                state.send_replace(ContactListState::loaded(contacts));
            }
            debug!("Contact bridge finished");
        }));

        Ok(())
    }

    /// Register for state updates.
    pub fn subscribe(&self) -> watch::Receiver<ContactListState> {
        self.state.subscribe()
    }

    /// Latest state snapshot.
    pub fn state(&self) -> ContactListState {
        self.state.borrow().clone()
    }

    pub fn list_view(&self) -> ListView {
        self.state.borrow().view()
    }

    /// Tear the bridge down. State keeps its last value.
    pub async fn stop(&self) {
        if let Some(task) = self.bridge.lock().await.take() {
            task.abort();
            debug!("Contact bridge stopped");
        }
    }

    pub async fn insert(&self, contact: &Contact) -> AppResult<i64> {
        Ok(self.repository.insert(contact).await?)
    }

    pub async fn update(&self, contact: &Contact) -> AppResult<u64> {
        Ok(self.repository.update(contact).await?)
    }

    pub async fn delete(&self, contact: &Contact) -> AppResult<u64> {
        Ok(self.repository.delete(contact).await?)
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    pub async fn clear(&self) -> AppResult<u64> {
        Ok(self.repository.clear().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Contact>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Current contents straight from the table, ordered by name.
    pub async fn contacts(&self) -> AppResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    /// Stop the bridge and close the account database. Returns false if the
    /// database was already closed.
    pub async fn close(&self) -> bool {
        self.stop().await;
        let closed = self.databases.close(self.account()).await;
        info!(
            "Closed contacts for {}",
            self.account().unwrap_or("<default>")
        );
        closed
    }

    /// Remove every contact, then close.
    pub async fn clear_and_close(&self) -> AppResult<bool> {
        let removed = self.clear().await?;
        debug!("Cleared {removed} contact(s) before closing");
        Ok(self.close().await)
    }
}

impl Drop for AddressViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.bridge.get_mut().take() {
            task.abort();
        }
    }
}
