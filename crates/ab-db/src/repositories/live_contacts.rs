use ab_core::Contact;

use tokio::sync::{Mutex, MutexGuard, watch};

/// Publishing side of one database's live contact list.
///
/// Shared by every repository handle on the same database. Writers hold
/// [`ContactFeed::lock`] across the statement and the republish, so
/// snapshots are sent in write order.
#[derive(Debug)]
pub struct ContactFeed {
    sender: watch::Sender<Vec<Contact>>,
    writes: Mutex<()>,
}

impl ContactFeed {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            sender,
            writes: Mutex::new(()),
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    pub(crate) fn send(&self, contacts: Vec<Contact>) {
        self.sender.send_replace(contacts);
    }

    pub(crate) fn subscribe(&self) -> LiveContacts {
        LiveContacts::new(self.sender.subscribe())
    }
}

impl Default for ContactFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscription to the repository's name-ordered contact list.
///
/// Every successful write through any repository on the same database
/// publishes a fresh snapshot. Dropping the subscription unregisters it.
pub struct LiveContacts {
    receiver: watch::Receiver<Vec<Contact>>,
}

impl LiveContacts {
    fn new(receiver: watch::Receiver<Vec<Contact>>) -> Self {
        Self { receiver }
    }

    /// The latest snapshot, without waiting.
    pub fn current(&self) -> Vec<Contact> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next snapshot.
    ///
    /// Returns `None` once the feed has been dropped, i.e. every repository
    /// handle is gone and the database has been closed.
    pub async fn changed(&mut self) -> Option<Vec<Contact>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
