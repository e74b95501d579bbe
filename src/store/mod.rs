//! Contact persistence.
//!
//! Provides abstraction over contact storage and retrieval, enabling
//! different implementations (SQLite document store, in-memory mock).

pub mod sqlite;

pub use sqlite::{SqliteContactStore, SqliteStore};

use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;

/// Repository for managing contacts.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Retrieve every contact, ordered by name.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Exact-match lookup by name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Create and persist a new contact. The store assigns the id.
    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact>;

    /// Replace name, phone number, and email on the record with this id.
    ///
    /// Fails with `StoreError::NotFound` when no such record exists.
    async fn update_by_id(&self, id: &str, fields: ContactFields) -> StoreResult<()>;

    /// Remove the record with this id. Absent ids are a no-op success.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
