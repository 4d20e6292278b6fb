use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::ContactsConfig;
use crate::contract::client::ContactsApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::ContactsLocalClient;
use crate::infra::storage::memory_repo::InMemoryContactsRepository;
use crate::infra::storage::seed::sample_contacts;

/// Contacts module: wires the store, the domain service and the in-process
/// client, and hands out the module's router.
#[derive(Clone)]
pub struct Contacts {
    api: Arc<dyn ContactsApi>,
}

impl Contacts {
    pub fn new(cfg: &ContactsConfig) -> Self {
        info!("Initializing contacts module");
        debug!(
            "Loaded contacts config: seed={}, id_length={}",
            cfg.seed, cfg.id_length
        );

        let repo = if cfg.seed {
            InMemoryContactsRepository::with_contacts(sample_contacts(Utc::now()))
        } else {
            InMemoryContactsRepository::new()
        };
        info!("Contacts store ready with {} contacts", repo.len());

        let service_config = ServiceConfig {
            id_length: cfg.id_length,
            ..Default::default()
        };
        let service = Arc::new(Service::new(Arc::new(repo), service_config));

        Self::with_api(Arc::new(ContactsLocalClient::new(service)))
    }

    /// Validate `cfg` and build the module from it.
    pub fn from_config(cfg: &ContactsConfig) -> anyhow::Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    /// Module around an arbitrary collaborator implementation.
    pub fn with_api(api: Arc<dyn ContactsApi>) -> Self {
        Self { api }
    }

    pub fn client(&self) -> Arc<dyn ContactsApi> {
        self.api.clone()
    }

    pub fn router(&self) -> axum::Router {
        info!("Registering contacts routes");
        routes::register_routes(axum::Router::new(), self.api.clone())
    }
}
