//! Route-level read and write handlers for the contacts root page, decoupled
//! from any HTTP types.

use tracing::{debug, instrument};

use crate::contract::{client::ContactsApi, error::ContactsError, model::Contact};

/// Render payload for the root page. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub contacts: Vec<Contact>,
    pub q: Option<String>,
}

/// Resolve the page payload for the raw `q` search parameter.
///
/// `contacts` is exactly what the collaborator returns for `q`; failures are
/// passed through untouched.
#[instrument(name = "contacts.page.resolve", skip(api))]
pub async fn resolve_page(
    api: &dyn ContactsApi,
    q: Option<String>,
) -> Result<PageData, ContactsError> {
    let contacts = api.list_contacts(q.as_deref()).await?;
    debug!(count = contacts.len(), "Resolved page data");
    Ok(PageData { contacts, q })
}

/// Create a blank contact and return the location the caller must be sent to:
/// the new contact's edit view.
#[instrument(name = "contacts.page.create", skip(api))]
pub async fn create_contact_action(api: &dyn ContactsApi) -> Result<String, ContactsError> {
    let contact = api.create_empty_contact().await?;
    Ok(contact.edit_path())
}
