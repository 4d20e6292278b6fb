use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{Contact, ContactPatch};
use crate::domain::page::PageData;

/// Query string of the contacts page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
}

/// REST DTO for contact representation with serde
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// JSON form of the page payload: `{contacts, q}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDataDto {
    pub contacts: Vec<ContactDto>,
    pub q: Option<String>,
}

/// Urlencoded body of the edit form. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
}

/// Urlencoded body of the favorite toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteForm {
    pub favorite: String,
}

impl From<Contact> for ContactDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first: c.first,
            last: c.last,
            avatar: c.avatar,
            twitter: c.twitter,
            notes: c.notes,
            favorite: c.favorite,
            created_at: c.created_at,
        }
    }
}

impl From<PageData> for PageDataDto {
    fn from(page: PageData) -> Self {
        Self {
            contacts: page.contacts.into_iter().map(ContactDto::from).collect(),
            q: page.q,
        }
    }
}

impl From<ContactForm> for ContactPatch {
    fn from(form: ContactForm) -> Self {
        Self {
            first: form.first,
            last: form.last,
            avatar: form.avatar,
            twitter: form.twitter,
            notes: form.notes,
            favorite: None,
        }
    }
}

impl From<FavoriteForm> for ContactPatch {
    fn from(form: FavoriteForm) -> Self {
        ContactPatch::favorite(form.favorite.eq_ignore_ascii_case("true"))
    }
}
