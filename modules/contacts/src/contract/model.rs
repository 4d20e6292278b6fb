use chrono::{DateTime, Utc};

/// Pure contact model for inter-module communication (no serde).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// A contact with only an id and a creation time; every other field empty.
    pub fn empty(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at,
        }
    }

    /// `"{first} {last}"` trimmed, or `None` when both parts are empty.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first.as_deref().unwrap_or("");
        let last = self.last.as_deref().unwrap_or("");
        if first.is_empty() && last.is_empty() {
            return None;
        }
        Some(format!("{first} {last}").trim().to_string())
    }

    /// Route of the contact's detail view.
    pub fn path(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    /// Route of the contact's edit view.
    pub fn edit_path(&self) -> String {
        format!("/contacts/{}/edit", self.id)
    }
}

/// Partial update for a contact. `Some("")` clears a text field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactPatch {
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Default::default()
        }
    }

    /// Apply the patch in place.
    pub fn apply_to(self, contact: &mut Contact) {
        fn set(slot: &mut Option<String>, value: Option<String>) {
            if let Some(v) = value {
                let v = v.trim().to_string();
                *slot = if v.is_empty() { None } else { Some(v) };
            }
        }
        set(&mut contact.first, self.first);
        set(&mut contact.last, self.last);
        set(&mut contact.avatar, self.avatar);
        set(&mut contact.twitter, self.twitter);
        set(&mut contact.notes, self.notes);
        if let Some(favorite) = self.favorite {
            contact.favorite = favorite;
        }
    }
}
