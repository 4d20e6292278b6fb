use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::Uri,
    response::{Html, Json, Redirect},
    Extension, Form,
};
use api_ingress::request_id::XRequestId;
use tracing::{error, info};

use crate::api::problem::ProblemResponse;
use crate::api::rest::dto::{ContactForm, FavoriteForm, PageDataDto, PageQuery};
use crate::api::rest::error::map_contacts_error;
use crate::contract::{client::ContactsApi, error::ContactsError, model::Contact};
use crate::domain::page::{create_contact_action, resolve_page, PageData};
use crate::view::{contact_pages, render_page, NavigationState};

type Api = Extension<Arc<dyn ContactsApi>>;

/// Request id recorded by the HTTP host; absent when the router runs standalone.
type ReqId = Option<Extension<XRequestId>>;

fn fail(e: ContactsError, uri: &Uri, rid: &ReqId) -> ProblemResponse {
    error!("Contacts request failed: {}", e);
    let request_id = rid.as_ref().map(|Extension(XRequestId(id))| id.as_str());
    map_contacts_error(&e, uri.path(), request_id)
}

/// Completed server render: the route being served is the active one.
fn shell(page: &PageData, uri: &Uri, outlet: &str) -> Html<String> {
    Html(render_page(
        page,
        &NavigationState::idle(),
        Some(uri.path()),
        outlet,
    ))
}

async fn page_and_contact(
    api: &dyn ContactsApi,
    q: Option<String>,
    id: &str,
) -> Result<(PageData, Contact), ContactsError> {
    let contact = api.get_contact(id).await?;
    let page = resolve_page(api, q).await?;
    Ok((page, contact))
}

/// GET / - contacts page with the index outlet
pub async fn contacts_page(
    Extension(api): Api,
    Query(query): Query<PageQuery>,
    uri: Uri,
    rid: ReqId,
) -> Result<Html<String>, ProblemResponse> {
    info!("Rendering contacts page, q={:?}", query.q);

    let page = resolve_page(api.as_ref(), query.q)
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(shell(&page, &uri, &contact_pages::render_index()))
}

/// GET /api/contacts - the page payload as JSON
pub async fn page_data(
    Extension(api): Api,
    Query(query): Query<PageQuery>,
    uri: Uri,
    rid: ReqId,
) -> Result<Json<PageDataDto>, ProblemResponse> {
    let page = resolve_page(api.as_ref(), query.q)
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(Json(PageDataDto::from(page)))
}

/// POST / - create a blank contact and go edit it
pub async fn create_contact(
    Extension(api): Api,
    uri: Uri,
    rid: ReqId,
) -> Result<Redirect, ProblemResponse> {
    info!("Creating empty contact");

    let location = create_contact_action(api.as_ref())
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(Redirect::to(&location))
}

/// GET /contacts/{id}
pub async fn contact_detail(
    Extension(api): Api,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
    uri: Uri,
    rid: ReqId,
) -> Result<Html<String>, ProblemResponse> {
    let (page, contact) = page_and_contact(api.as_ref(), query.q, &id)
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(shell(&page, &uri, &contact_pages::render_contact(&contact)))
}

/// GET /contacts/{id}/edit
pub async fn edit_contact_form(
    Extension(api): Api,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
    uri: Uri,
    rid: ReqId,
) -> Result<Html<String>, ProblemResponse> {
    let (page, contact) = page_and_contact(api.as_ref(), query.q, &id)
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(shell(&page, &uri, &contact_pages::render_edit(&contact)))
}

/// POST /contacts/{id}/edit
pub async fn update_contact(
    Extension(api): Api,
    Path(id): Path<String>,
    uri: Uri,
    rid: ReqId,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, ProblemResponse> {
    info!("Updating contact {}", id);

    let contact = api
        .update_contact(&id, form.into())
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(Redirect::to(&contact.path()))
}

/// POST /contacts/{id}/favorite
pub async fn set_favorite(
    Extension(api): Api,
    Path(id): Path<String>,
    uri: Uri,
    rid: ReqId,
    Form(form): Form<FavoriteForm>,
) -> Result<Redirect, ProblemResponse> {
    let contact = api
        .update_contact(&id, form.into())
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(Redirect::to(&contact.path()))
}

/// POST /contacts/{id}/destroy
pub async fn destroy_contact(
    Extension(api): Api,
    Path(id): Path<String>,
    uri: Uri,
    rid: ReqId,
) -> Result<Redirect, ProblemResponse> {
    info!("Deleting contact {}", id);

    api.delete_contact(&id)
        .await
        .map_err(|e| fail(e, &uri, &rid))?;
    Ok(Redirect::to("/"))
}
