use async_trait::async_trait;
use contact_book_server::domain::ContactId;
use contact_book_server::error::{StoreError, StoreResult};
use contact_book_server::models::{Contact, ContactFields};
use contact_book_server::store::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Provides an in-memory implementation of ContactStore that can be
/// easily seeded with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_next: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a contact.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.as_str().to_string(), contact);
    }

    /// Current number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Make the next store operation fail, simulating unreachable storage.
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        drop(counts);

        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(StoreError::Other("storage unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;

        let contacts = self.contacts.lock().unwrap();
        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_name")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().find(|c| c.name == name).cloned())
    }

    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        self.track_call("insert")?;

        let contact = Contact {
            id: ContactId::generate(),
            name: fields.name,
            phone_number: fields.phone_number,
            email: fields.email,
        };
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.as_str().to_string(), contact.clone());
        Ok(contact)
    }

    async fn update_by_id(&self, id: &str, fields: ContactFields) -> StoreResult<()> {
        self.track_call("update_by_id")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(id) {
            Some(contact) => {
                contact.name = fields.name;
                contact.phone_number = fields.phone_number;
                contact.email = fields.email;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.track_call("delete_by_id")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts.remove(id);
        Ok(())
    }
}
