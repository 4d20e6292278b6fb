use async_trait::async_trait;

use crate::contract::{
    error::ContactsError,
    model::{Contact, ContactPatch},
};

/// Public API of the contacts module: the data collaborator the page
/// resolver and the create action talk to.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Contacts matching `query` (all contacts for `None` or empty), in store order.
    async fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactsError>;

    /// Create a contact with a fresh unique id and every other field empty.
    async fn create_empty_contact(&self) -> Result<Contact, ContactsError>;

    /// Get a contact by id
    async fn get_contact(&self, id: &str) -> Result<Contact, ContactsError>;

    /// Update a contact with partial data
    async fn update_contact(&self, id: &str, patch: ContactPatch)
        -> Result<Contact, ContactsError>;

    /// Delete a contact by id
    async fn delete_contact(&self, id: &str) -> Result<(), ContactsError>;
}
