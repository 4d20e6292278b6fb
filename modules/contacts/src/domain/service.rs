use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Contact, ContactPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::ContactsRepository;

/// Domain service for contact management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
    config: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Length of generated contact ids.
    pub id_length: usize,
    /// How many fresh ids to try before giving up on a collision.
    pub max_id_attempts: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            id_length: 12,
            max_id_attempts: 3,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn ContactsRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(name = "contacts.service.list_contacts", skip(self))]
    pub async fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>, DomainError> {
        debug!("Listing contacts");
        let contacts = self
            .repo
            .list(query)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        debug!("Listed {} contacts", contacts.len());
        Ok(contacts)
    }

    #[instrument(name = "contacts.service.get_contact", skip(self), fields(contact_id = %id))]
    pub async fn get_contact(&self, id: &str) -> Result<Contact, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::contact_not_found(id))
    }

    /// Create a blank contact under a freshly generated id.
    #[instrument(name = "contacts.service.create_empty_contact", skip(self))]
    pub async fn create_empty_contact(&self) -> Result<Contact, DomainError> {
        info!("Creating empty contact");

        let id = self.fresh_id().await?;
        let contact = Contact::empty(id, Utc::now());

        self.repo
            .insert(contact.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Created contact with id={}", contact.id);
        Ok(contact)
    }

    #[instrument(name = "contacts.service.update_contact", skip(self, patch), fields(contact_id = %id))]
    pub async fn update_contact(
        &self,
        id: &str,
        patch: ContactPatch,
    ) -> Result<Contact, DomainError> {
        info!("Updating contact");

        let mut current = self.get_contact(id).await?;
        patch.apply_to(&mut current);

        self.repo
            .update(current.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(current)
    }

    #[instrument(name = "contacts.service.delete_contact", skip(self), fields(contact_id = %id))]
    pub async fn delete_contact(&self, id: &str) -> Result<(), DomainError> {
        info!("Deleting contact");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        if !deleted {
            return Err(DomainError::contact_not_found(id));
        }
        Ok(())
    }

    async fn fresh_id(&self) -> Result<String, DomainError> {
        let len = self.config.id_length;
        if len == 0 {
            return Err(DomainError::storage("contact id length must be positive"));
        }
        for _ in 0..self.config.max_id_attempts.max(1) {
            let id = nanoid::nanoid!(len);
            let taken = self
                .repo
                .find_by_id(&id)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?
                .is_some();
            if !taken {
                return Ok(id);
            }
            warn!(%id, "Generated contact id collided, retrying");
        }
        Err(DomainError::storage("could not allocate a unique contact id"))
    }
}
