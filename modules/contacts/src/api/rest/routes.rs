use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::contract::client::ContactsApi;

/// Mount the contacts page, its create action and the nested contact routes.
pub fn register_routes(router: Router, api: Arc<dyn ContactsApi>) -> Router {
    router
        .route(
            "/",
            get(handlers::contacts_page).post(handlers::create_contact),
        )
        .route("/api/contacts", get(handlers::page_data))
        .route("/contacts/{id}", get(handlers::contact_detail))
        .route(
            "/contacts/{id}/edit",
            get(handlers::edit_contact_form).post(handlers::update_contact),
        )
        .route("/contacts/{id}/favorite", post(handlers::set_favorite))
        .route("/contacts/{id}/destroy", post(handlers::destroy_contact))
        .layer(Extension(api))
}
