//! SQLite-backed document store for contacts.
//!
//! Contacts are kept as schemaless JSON documents in a single table; lookups
//! by name go through `json_extract` with an expression index. The synchronous
//! [`SqliteStore`] does the actual I/O; [`SqliteContactStore`] wraps it with
//! `tokio::task::spawn_blocking` so handlers never block the async runtime.

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::store::ContactStore;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Synchronous contact store over a SQLite file.
///
/// Cheap to clone; each operation opens its own connection, which keeps the
/// store safe to use from the blocking thread pool without shared locks.
#[derive(Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) the store at the given path and ensure the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let store = Self {
            db_path: path.to_path_buf(),
        };
        let conn = store.conn()?;
        Self::init_schema(&conn)?;
        Ok(store)
    }

    fn conn(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.db_path)?;
        // Pragmas tuned for async server usage
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(Duration::from_millis(5000))?;
        Ok(conn)
    }

    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
              id TEXT PRIMARY KEY,
              doc TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_contacts_name
              ON contacts(json_extract(doc, '$.name'));
            "#,
        )?;
        Ok(())
    }

    /// Every contact, ordered by name.
    pub fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT doc FROM contacts ORDER BY json_extract(doc, '$.name')",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut contacts = Vec::new();
        for doc in rows {
            contacts.push(serde_json::from_str(&doc?)?);
        }
        Ok(contacts)
    }

    /// Exact-match lookup by name.
    pub fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let conn = self.conn()?;
        let doc: Option<String> = conn
            .query_row(
                "SELECT doc FROM contacts WHERE json_extract(doc, '$.name') = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        match doc {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    /// Create and persist a new contact with a fresh id.
    pub fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        let contact = Contact {
            id: ContactId::generate(),
            name: fields.name,
            phone_number: fields.phone_number,
            email: fields.email,
        };
        let doc = serde_json::to_string(&contact)?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO contacts (id, doc) VALUES (?1, ?2)",
            params![contact.id.as_str(), doc],
        )?;
        Ok(contact)
    }

    /// Replace the writable fields on the record with this id.
    pub fn update_by_id(&self, id: &str, fields: ContactFields) -> StoreResult<()> {
        let contact_id =
            ContactId::new(id).map_err(|_| StoreError::NotFound(id.to_string()))?;
        let contact = Contact {
            id: contact_id,
            name: fields.name,
            phone_number: fields.phone_number,
            email: fields.email,
        };
        let doc = serde_json::to_string(&contact)?;

        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE contacts SET doc = ?2 WHERE id = ?1",
            params![id, doc],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Remove the record with this id, if present.
    pub fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        Ok(())
    }
}

/// Async wrapper around the synchronous [`SqliteStore`].
///
/// Uses `tokio::task::spawn_blocking` to run SQLite operations on a dedicated
/// thread pool, preventing blocking of the async runtime.
#[derive(Clone)]
pub struct SqliteContactStore {
    store: Arc<SqliteStore>,
}

impl SqliteContactStore {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.find_all())
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let store = self.store.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || store.find_by_name(&name))
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }

    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.insert(fields))
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }

    async fn update_by_id(&self, id: &str, fields: ContactFields) -> StoreResult<()> {
        let store = self.store.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || store.update_by_id(&id, fields))
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let store = self.store.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || store.delete_by_id(&id))
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }
}
