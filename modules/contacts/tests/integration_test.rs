mod common;

use anyhow::Result;
use api_ingress::{ApiIngress, ApiIngressConfig};
use axum::http::{header, StatusCode};

use common::{body_string, contact, empty_module, get, post_form, send, RecordingApi};
use contacts::api::rest::dto::PageDataDto;
use contacts::{Contacts, ContactsConfig};

fn location(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn empty_store_renders_no_contacts_placeholder() -> Result<()> {
    let router = empty_module().router();

    let resp = get(&router, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;

    assert!(html.contains("<i>No contacts</i>"));
    assert!(!html.contains("<ul>"));
    assert!(html.contains(r#"value="""#));
    assert!(html.contains(r#"id="index-page""#));
    assert!(html.contains(r#"data-history="push""#));
    Ok(())
}

#[tokio::test]
async fn create_redirects_to_edit_view_of_the_new_contact() -> Result<()> {
    let module = empty_module();
    let router = module.router();

    let resp = send(
        &router,
        axum::http::Request::post("/").body(axum::body::Body::empty())?,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let all = module.client().list_contacts(None).await?;
    assert_eq!(all.len(), 1);
    let created = &all[0];
    assert_eq!(location(&resp), format!("/contacts/{}/edit", created.id));
    assert_eq!(created.display_name(), None);
    assert!(!created.favorite);

    // the edit view resolves immediately
    let resp = get(&router, &location(&resp)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains("<i>No Name</i>"));
    Ok(())
}

#[tokio::test]
async fn every_create_makes_a_new_contact() -> Result<()> {
    let module = empty_module();
    let router = module.router();

    let mut targets = Vec::new();
    for _ in 0..3 {
        let resp = post_form(&router, "/", "").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        targets.push(location(&resp));
    }
    targets.sort();
    targets.dedup();
    assert_eq!(targets.len(), 3);
    assert_eq!(module.client().list_contacts(None).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn search_query_filters_list_and_fills_input() -> Result<()> {
    let router = Contacts::new(&Default::default()).router();

    let html = body_string(get(&router, "/?q=ryan").await).await;
    assert!(html.contains(r#"value="ryan""#));
    assert!(html.contains("Ryan Florence"));
    assert!(!html.contains("Kent C. Dodds"));
    assert!(html.contains(r#"data-history="replace""#));
    assert!(html.contains(r#"name="q" autofocus />"#));

    let html = body_string(get(&router, "/?q=nobody-by-this-name").await).await;
    assert!(html.contains("<i>No contacts</i>"));
    Ok(())
}

#[tokio::test]
async fn page_data_json_matches_collaborator_output() -> Result<()> {
    let listed = vec![
        contact("b", Some("Bea"), None, false),
        contact("a", None, None, true),
    ];
    let api = RecordingApi::returning(listed.clone());
    let router = Contacts::with_api(api.clone()).router();

    let resp = get(&router, "/api/contacts?q=be").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let dto: PageDataDto = serde_json::from_str(&body_string(resp).await)?;

    assert_eq!(dto.q.as_deref(), Some("be"));
    let ids: Vec<_> = dto.contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(api.queries.lock().clone(), vec![Some("be".to_string())]);
    Ok(())
}

#[tokio::test]
async fn sidebar_renders_names_placeholders_and_favorites() -> Result<()> {
    let api = RecordingApi::returning(vec![
        contact("1", Some("Ada"), Some("Lovelace"), true),
        contact("2", None, None, false),
    ]);
    let router = Contacts::with_api(api).router();

    let html = body_string(get(&router, "/contacts/1").await).await;
    assert!(html.contains(r#"<a href="/contacts/1" class="active">Ada Lovelace <span>★</span></a>"#));
    assert!(html.contains(r#"<a href="/contacts/2" class="">"#));
    assert!(html.contains("<i>No Name</i></a>"));
    assert_eq!(html.matches("<span>★</span>").count(), 1);
    Ok(())
}

#[tokio::test]
async fn edit_favorite_and_destroy_flow() -> Result<()> {
    let module = empty_module();
    let router = module.router();

    let resp = post_form(&router, "/", "").await;
    let edit = location(&resp);
    let id = edit
        .trim_start_matches("/contacts/")
        .trim_end_matches("/edit")
        .to_string();

    let resp = post_form(&router, &edit, "first=Grace&last=Hopper&twitter=%40grace").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/contacts/{id}"));

    let html = body_string(get(&router, &format!("/contacts/{id}")).await).await;
    assert!(html.contains("<h1>Grace Hopper "));
    assert!(html.contains("https://twitter.com/grace"));

    let resp = post_form(&router, &format!("/contacts/{id}/favorite"), "favorite=true").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(module.client().get_contact(&id).await?.favorite);

    let resp = post_form(&router, &format!("/contacts/{id}/destroy"), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(module.client().list_contacts(None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_contact_is_a_404_problem() -> Result<()> {
    let router = empty_module().router();

    for uri in ["/contacts/missing", "/contacts/missing/edit"] {
        let resp = get(&router, uri).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
        let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
        assert_eq!(body["code"], "CONTACTS_NOT_FOUND");
        assert_eq!(body["instance"], uri);
    }

    let resp = post_form(&router, "/contacts/missing/destroy", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_failure_reaches_the_error_boundary() -> Result<()> {
    let router = Contacts::with_api(RecordingApi::failing()).router();

    let resp = get(&router, "/?q=x").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body["code"], "CONTACTS_INTERNAL");

    let resp = post_form(&router, "/", "").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn zero_id_length_is_rejected_and_never_hangs_create() -> Result<()> {
    let cfg = ContactsConfig {
        seed: false,
        id_length: 0,
    };
    assert!(Contacts::from_config(&cfg).is_err());

    // built without validation, create still answers
    let router = Contacts::new(&cfg).router();
    let resp = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        post_form(&router, "/", ""),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn problems_carry_the_hosts_request_id() -> Result<()> {
    let ingress = ApiIngress::new(ApiIngressConfig::default(), std::time::Duration::from_secs(5));
    let router = ingress.build_router(empty_module().router());

    let resp = send(
        &router,
        axum::http::Request::get("/contacts/missing")
            .header("x-request-id", "req-42")
            .body(axum::body::Body::empty())?,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert_eq!(body["request_id"], "req-42");

    // without the host there is no request id to report
    let resp = get(&empty_module().router(), "/contacts/missing").await;
    let body: serde_json::Value = serde_json::from_str(&body_string(resp).await)?;
    assert!(body.get("request_id").is_none());
    Ok(())
}
