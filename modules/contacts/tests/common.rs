#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::Utc;
use parking_lot::Mutex;
use tower::ServiceExt;

use contacts::config::ContactsConfig;
use contacts::contract::{Contact, ContactPatch, ContactsApi, ContactsError};
use contacts::Contacts;

/// Contacts module over an empty store.
pub fn empty_module() -> Contacts {
    Contacts::new(&ContactsConfig {
        seed: false,
        ..Default::default()
    })
}

pub fn contact(id: &str, first: Option<&str>, last: Option<&str>, favorite: bool) -> Contact {
    let mut c = Contact::empty(id, Utc::now());
    c.first = first.map(str::to_string);
    c.last = last.map(str::to_string);
    c.favorite = favorite;
    c
}

pub async fn send(router: &Router, req: Request<Body>) -> Response {
    router.clone().oneshot(req).await.expect("router call")
}

pub async fn get(router: &Router, uri: &str) -> Response {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(router: &Router, uri: &str, body: &str) -> Response {
    send(
        router,
        Request::post(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Collaborator stub returning a canned list and recording every query it sees.
#[derive(Default)]
pub struct RecordingApi {
    pub contacts: Vec<Contact>,
    pub queries: Mutex<Vec<Option<String>>>,
    pub created: Mutex<Vec<Contact>>,
    pub fail: bool,
}

impl RecordingApi {
    pub fn returning(contacts: Vec<Contact>) -> Arc<Self> {
        Arc::new(Self {
            contacts,
            ..Default::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }
}

#[async_trait]
impl ContactsApi for RecordingApi {
    async fn list_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>, ContactsError> {
        self.queries.lock().push(query.map(str::to_string));
        if self.fail {
            return Err(ContactsError::internal());
        }
        Ok(self.contacts.clone())
    }

    async fn create_empty_contact(&self) -> Result<Contact, ContactsError> {
        if self.fail {
            return Err(ContactsError::internal());
        }
        let mut created = self.created.lock();
        let c = Contact::empty(format!("new-{}", created.len()), Utc::now());
        created.push(c.clone());
        Ok(c)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact, ContactsError> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ContactsError::not_found(id))
    }

    async fn update_contact(
        &self,
        id: &str,
        _patch: ContactPatch,
    ) -> Result<Contact, ContactsError> {
        self.get_contact(id).await
    }

    async fn delete_contact(&self, id: &str) -> Result<(), ContactsError> {
        Err(ContactsError::not_found(id))
    }
}
