//! Server-side HTML rendering.
//!
//! Every function here is pure: payload and navigation state in, markup out.

pub mod contact_pages;
pub mod layout;
pub mod navigation;
pub mod search;
pub mod sidebar;

pub use layout::render_page;
pub use navigation::NavigationState;
pub use search::{HistoryMode, SearchSession};

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
