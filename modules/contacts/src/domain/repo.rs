use crate::contract::model::Contact;
use async_trait::async_trait;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Contacts whose first or last name contains `query` (case-insensitive),
    /// ordered by last name then creation time. `None`/empty returns everything.
    async fn list(&self, query: Option<&str>) -> anyhow::Result<Vec<Contact>>;
    /// Load a contact by id.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Contact>>;
    /// Insert a fully-formed contact. Fails if the id is already taken.
    ///
    /// Service computes id/timestamps; repo persists.
    async fn insert(&self, c: Contact) -> anyhow::Result<()>;
    /// Replace an existing contact (by `c.id`).
    async fn update(&self, c: Contact) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a contact was removed.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
}
