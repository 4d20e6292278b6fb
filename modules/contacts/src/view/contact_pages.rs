//! Outlet content for the routes nested under the contacts page.

use crate::contract::model::Contact;
use crate::view::escape;

/// Detail region of the root route.
pub fn render_index() -> String {
    r#"<p id="index-page">This is a demo for Remix.<br />Check out <a href="https://remix.run">the docs at remix.run</a>.</p>"#
        .to_string()
}

fn favorite_form(contact: &Contact) -> String {
    let (next, label, glyph) = if contact.favorite {
        ("false", "Remove from favorites", "★")
    } else {
        ("true", "Add to favorites", "☆")
    };
    format!(
        r#"<form method="post" action="{action}"><button aria-label="{label}" name="favorite" value="{next}">{glyph}</button></form>"#,
        action = escape(&format!("{}/favorite", contact.path())),
    )
}

/// Read-only view of a contact.
pub fn render_contact(contact: &Contact) -> String {
    let mut out = String::from(r#"<div id="contact">"#);

    let avatar = contact.avatar.as_deref().unwrap_or("");
    out.push_str(&format!(
        r#"<div><img alt="{alt}" src="{src}" /></div><div><h1>"#,
        alt = escape(&format!(
            "{} avatar",
            contact.display_name().unwrap_or_default()
        )),
        src = escape(avatar),
    ));
    match contact.display_name() {
        Some(name) => out.push_str(&escape(&name)),
        None => out.push_str("<i>No Name</i>"),
    }
    out.push_str(&format!(" {}</h1>", favorite_form(contact)));

    if let Some(handle) = contact.twitter.as_deref() {
        out.push_str(&format!(
            r#"<p><a href="https://twitter.com/{href}">{handle}</a></p>"#,
            href = urlencoding::encode(handle.trim_start_matches('@')),
            handle = escape(handle),
        ));
    }
    if let Some(notes) = contact.notes.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(notes)));
    }

    let path = escape(&contact.path());
    out.push_str(&format!(
        r#"<div><form action="{path}/edit" method="get"><button type="submit">Edit</button></form><form action="{path}/destroy" method="post" onsubmit="return confirm('Please confirm you want to delete this record.');"><button type="submit">Delete</button></form></div></div></div>"#,
    ));
    out
}

fn text_input(name: &str, label: &str, value: Option<&str>, placeholder: &str) -> String {
    format!(
        r#"<input aria-label="{label}" name="{name}" placeholder="{placeholder}" type="text" value="{value}" />"#,
        value = escape(value.unwrap_or("")),
    )
}

/// Edit form for a contact; posts back to its own route.
pub fn render_edit(contact: &Contact) -> String {
    format!(
        r#"<form id="contact-form" method="post" action="{action}">
<p><span>Name</span>{first}{last}</p>
<label><span>Twitter</span>{twitter}</label>
<label><span>Avatar URL</span>{avatar}</label>
<label><span>Notes</span><textarea name="notes" rows="6">{notes}</textarea></label>
<p><button type="submit">Save</button><button type="button" onclick="history.back()">Cancel</button></p>
</form>"#,
        action = escape(&contact.edit_path()),
        first = text_input("first", "First name", contact.first.as_deref(), "First"),
        last = text_input("last", "Last name", contact.last.as_deref(), "Last"),
        twitter = text_input("twitter", "Twitter", contact.twitter.as_deref(), "@jack"),
        avatar = text_input(
            "avatar",
            "Avatar URL",
            contact.avatar.as_deref(),
            "https://example.com/avatar.jpg"
        ),
        notes = escape(contact.notes.as_deref().unwrap_or("")),
    )
}
