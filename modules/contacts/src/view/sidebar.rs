use crate::contract::model::Contact;
use crate::view::{escape, NavigationState};

/// Route matching of a sidebar link: the link's own path or anything nested under it.
fn is_active(link: &str, active_path: Option<&str>) -> bool {
    active_path.is_some_and(|p| {
        p == link || (p.starts_with(link) && p[link.len()..].starts_with('/'))
    })
}

/// CSS class of a contact link: `active` for the current route, `pending` for
/// the target of an unresolved navigation.
pub fn link_class(link: &str, active_path: Option<&str>, nav: &NavigationState) -> &'static str {
    if is_active(link, active_path) {
        "active"
    } else if nav.is_navigating && nav.pending_path.as_deref() == Some(link) {
        "pending"
    } else {
        ""
    }
}

/// Inner markup of a contact link: name (or placeholder) plus favorite marker.
pub fn contact_label(contact: &Contact) -> String {
    let mut out = match contact.display_name() {
        Some(name) => escape(&name),
        None => "<i>No Name</i>".to_string(),
    };
    if contact.favorite {
        out.push_str(" <span>★</span>");
    }
    out
}

/// The `<nav>` body: one link per contact in the given order, or a placeholder.
pub fn render_contact_list(
    contacts: &[Contact],
    active_path: Option<&str>,
    nav: &NavigationState,
) -> String {
    if contacts.is_empty() {
        return "<p><i>No contacts</i></p>".to_string();
    }

    let mut out = String::from("<ul>");
    for contact in contacts {
        let path = contact.path();
        out.push_str(&format!(
            r#"<li><a href="{href}" class="{class}">{label}</a></li>"#,
            href = escape(&path),
            class = link_class(&path, active_path, nav),
            label = contact_label(contact),
        ));
    }
    out.push_str("</ul>");
    out
}
