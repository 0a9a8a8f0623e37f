use crate::{ContactFeed, DbError, LiveContacts, Result as DbErrorResult};

use ab_core::Contact;

use std::sync::Arc;

use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    is_active: bool,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact {
            id: Some(r.id),
            name: r.name,
            email: r.email,
            phone_number: r.phone_number,
            is_active: r.is_active,
        }
    }
}

/// Single-table access to one account's contacts.
///
/// Handles built over the same [`ContactFeed`] share the live view, so a
/// write through any of them reaches every [`LiveContacts`] subscriber.
#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
    feed: Arc<ContactFeed>,
}

impl ContactRepository {
    /// Repository with a feed of its own.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_feed(pool, Arc::new(ContactFeed::new()))
    }

    /// Repository publishing to an existing feed.
    pub fn with_feed(pool: SqlitePool, feed: Arc<ContactFeed>) -> Self {
        Self { pool, feed }
    }

    /// Insert, replacing any row with the same id. Returns the row id.
    pub async fn insert(&self, contact: &Contact) -> DbErrorResult<i64> {
        let _write = self.feed.lock().await;
        let result = sqlx::query(
            r#"
              INSERT OR REPLACE INTO address_book (
                  id, name, email, phone_number, is_active
              ) VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.is_active)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted contact {id}");

        self.publish().await?;
        Ok(id)
    }

    /// Update all fields by id. Returns the number of rows changed (0 when the
    /// id no longer exists).
    pub async fn update(&self, contact: &Contact) -> DbErrorResult<u64> {
        let id = contact.id.ok_or_else(|| DbError::missing_identity("update"))?;

        let _write = self.feed.lock().await;
        let result = sqlx::query(
            r#"
              UPDATE address_book
              SET name = ?, email = ?, phone_number = ?, is_active = ?
              WHERE id = ?
              "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.is_active)
        .bind(id)
        .execute(&self.pool)
        .await?;

        debug!(
            "Updated contact {id} ({} row(s))",
            result.rows_affected()
        );

        self.publish().await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, contact: &Contact) -> DbErrorResult<u64> {
        let id = contact.id.ok_or_else(|| DbError::missing_identity("delete"))?;
        self.delete_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<u64> {
        let _write = self.feed.lock().await;
        let result = sqlx::query("DELETE FROM address_book WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(
            "Deleted contact {id} ({} row(s))",
            result.rows_affected()
        );

        self.publish().await?;
        Ok(result.rows_affected())
    }

    /// Remove every contact.
    pub async fn clear(&self) -> DbErrorResult<u64> {
        let _write = self.feed.lock().await;
        let result = sqlx::query("DELETE FROM address_book")
            .execute(&self.pool)
            .await?;

        debug!("Cleared {} contact(s)", result.rows_affected());

        self.publish().await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
              SELECT id, name, email, phone_number, is_active
              FROM address_book
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Contact::from))
    }

    /// All contacts ordered by name.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
              SELECT id, name, email, phone_number, is_active
              FROM address_book
              ORDER BY name ASC, id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    /// Subscribe to the live, name-ordered list. The returned view already
    /// holds the current contents.
    pub async fn watch(&self) -> DbErrorResult<LiveContacts> {
        let _write = self.feed.lock().await;
        self.publish().await?;
        Ok(self.feed.subscribe())
    }

    /// Caller holds the feed lock.
    async fn publish(&self) -> DbErrorResult<()> {
        let contacts = self.find_all().await?;
        self.feed.send(contacts);
        Ok(())
    }
}
