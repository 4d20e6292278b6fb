use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::ContactsApi,
    error::ContactsError,
    model::{Contact, ContactPatch},
};
use crate::domain::service::Service;

/// Local implementation of the ContactsApi trait that delegates to the domain service
pub struct ContactsLocalClient {
    service: Arc<Service>,
}

impl ContactsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ContactsApi for ContactsLocalClient {
    async fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactsError> {
        self.service.list_contacts(query).await.map_err(Into::into)
    }

    async fn create_empty_contact(&self) -> Result<Contact, ContactsError> {
        self.service.create_empty_contact().await.map_err(Into::into)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact, ContactsError> {
        self.service.get_contact(id).await.map_err(Into::into)
    }

    async fn update_contact(
        &self,
        id: &str,
        patch: ContactPatch,
    ) -> Result<Contact, ContactsError> {
        self.service
            .update_contact(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_contact(&self, id: &str) -> Result<(), ContactsError> {
        self.service.delete_contact(id).await.map_err(Into::into)
    }
}
