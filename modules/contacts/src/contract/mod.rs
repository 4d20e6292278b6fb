pub mod client;
pub mod error;
pub mod model;

pub use client::ContactsApi;
pub use error::ContactsError;
pub use model::{Contact, ContactPatch};
