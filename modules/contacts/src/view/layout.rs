use crate::domain::page::PageData;
use crate::view::sidebar::render_contact_list;
use crate::view::{escape, NavigationState, SearchSession};

/// Browser side of the search box and sidebar: submit the search form on every
/// input (push or replace as `data-history` says, replace afterwards), keep
/// focus in the search box across reloads and mirror in-flight navigation with
/// the same classes the server renders.
pub(crate) const CLIENT_SCRIPT: &str = r##"<script>
(function () {
  var form = document.getElementById("search-form");
  var input = document.getElementById("q");
  var spinner = document.getElementById("search-spinner");
  var detail = document.getElementById("detail");
  var mode = form.dataset.history;
  if (input.autofocus) {
    input.focus();
    var end = input.value.length;
    input.setSelectionRange(end, end);
  }
  form.addEventListener("input", function () {
    var params = new URLSearchParams(new FormData(form));
    var url = form.getAttribute("action") + "?" + params.toString();
    var searching = input.value !== "";
    input.classList.toggle("loading", searching);
    spinner.hidden = !searching;
    window.location[mode === "push" ? "assign" : "replace"](url);
    mode = "replace";
  });
  document.querySelectorAll("#sidebar nav a").forEach(function (link) {
    link.addEventListener("click", function () {
      if (!link.classList.contains("active")) link.classList.add("pending");
      detail.classList.add("loading");
    });
  });
})();
</script>"##;

/// Render the full document: sidebar with search and contact list, and the
/// detail region wrapping `outlet`.
///
/// `active_path` is the path of the route being rendered; it marks the
/// matching sidebar entry as active.
pub fn render_page(
    page: &PageData,
    nav: &NavigationState,
    active_path: Option<&str>,
    outlet: &str,
) -> String {
    let q = page.q.as_deref().unwrap_or("");
    let searching = nav.searching();
    let session = SearchSession::new(page.q.as_deref());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<title>Remix Contacts</title>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<link rel="stylesheet" href="/app.css" />
</head>
<body>
<div id="sidebar">
<h1>Remix Contacts</h1>
<div>
<form id="search-form" role="search" action="/" method="get" data-history="{history}">
<input id="q" class="{input_class}" value="{q}" aria-label="Search contacts" placeholder="Search" type="search" name="q"{autofocus} />
<div id="search-spinner" aria-hidden="true"{spinner_hidden}></div>
</form>
<form method="post" action="/">
<button type="submit">New</button>
</form>
</div>
<nav>{list}</nav>
</div>
<div class="{detail_class}" id="detail">{outlet}</div>
{script}
</body>
</html>
"#,
        history = session.history_mode().as_str(),
        input_class = if searching { "loading" } else { "" },
        q = escape(q),
        autofocus = if page.q.is_some() { " autofocus" } else { "" },
        spinner_hidden = if searching { "" } else { " hidden" },
        list = render_contact_list(&page.contacts, active_path, nav),
        detail_class = if nav.loading() { "loading" } else { "" },
        outlet = outlet,
        script = CLIENT_SCRIPT,
    )
}
