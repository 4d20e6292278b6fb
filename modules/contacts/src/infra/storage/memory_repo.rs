//! In-process contact store backing the repository port.
//!
//! Reads take a shared lock and clone out; no lock is held across an `.await`.

use std::collections::HashMap;

use anyhow::bail;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::Contact;
use crate::domain::repo::ContactsRepository;

#[derive(Default)]
pub struct InMemoryContactsRepository {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl InMemoryContactsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `contacts`; later duplicates of an id win.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let map = contacts.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            contacts: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}

fn matches_query(c: &Contact, needle: &str) -> bool {
    [c.first.as_deref(), c.last.as_deref()]
        .into_iter()
        .flatten()
        .any(|part| part.to_lowercase().contains(needle))
}

#[async_trait]
impl ContactsRepository for InMemoryContactsRepository {
    async fn list(&self, query: Option<&str>) -> anyhow::Result<Vec<Contact>> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let mut out: Vec<Contact> = {
            let guard = self.contacts.read();
            guard
                .values()
                .filter(|c| needle.as_deref().map_or(true, |n| matches_query(c, n)))
                .cloned()
                .collect()
        };

        out.sort_by(|a, b| {
            let la = a.last.as_deref().unwrap_or("");
            let lb = b.last.as_deref().unwrap_or("");
            la.cmp(lb)
                .then(a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(out)
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Contact>> {
        Ok(self.contacts.read().get(id).cloned())
    }

    async fn insert(&self, c: Contact) -> anyhow::Result<()> {
        let mut guard = self.contacts.write();
        if guard.contains_key(&c.id) {
            bail!("contact id '{}' already exists", c.id);
        }
        guard.insert(c.id.clone(), c);
        Ok(())
    }

    async fn update(&self, c: Contact) -> anyhow::Result<()> {
        let mut guard = self.contacts.write();
        match guard.get_mut(&c.id) {
            Some(slot) => {
                *slot = c;
                Ok(())
            }
            None => bail!("contact id '{}' does not exist", c.id),
        }
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.contacts.write().remove(id).is_some())
    }
}
