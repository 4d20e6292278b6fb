/// Read-only snapshot of an in-flight navigation, supplied by whoever drives
/// the view. A completed server render is [`NavigationState::idle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_navigating: bool,
    /// `q` parameter of the navigation target, if it has one.
    pub pending_query: Option<String>,
    /// Path of the navigation target.
    pub pending_path: Option<String>,
}

impl NavigationState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Navigation in flight towards `location` (`/path?query`).
    pub fn to(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (location, None),
        };
        let pending_query = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == "q")
                .map(|(_, v)| v.into_owned())
        });
        Self {
            is_navigating: true,
            pending_query,
            pending_path: Some(path.to_string()),
        }
    }

    /// A search is running: navigating to a target with a non-empty `q`.
    pub fn searching(&self) -> bool {
        self.is_navigating
            && self
                .pending_query
                .as_deref()
                .is_some_and(|q| !q.is_empty())
    }

    /// Page-to-page navigation other than a live search.
    pub fn loading(&self) -> bool {
        self.is_navigating && !self.searching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_neither_searching_nor_loading() {
        let nav = NavigationState::idle();
        assert!(!nav.searching());
        assert!(!nav.loading());
    }

    #[test]
    fn navigation_with_query_is_searching() {
        let nav = NavigationState::to("/?q=ry%20an");
        assert_eq!(nav.pending_query.as_deref(), Some("ry an"));
        assert_eq!(nav.pending_path.as_deref(), Some("/"));
        assert!(nav.searching());
        assert!(!nav.loading());
    }

    #[test]
    fn empty_query_counts_as_plain_navigation() {
        let nav = NavigationState::to("/?q=");
        assert!(!nav.searching());
        assert!(nav.loading());
    }

    #[test]
    fn contact_navigation_is_loading() {
        let nav = NavigationState::to("/contacts/abc");
        assert_eq!(nav.pending_query, None);
        assert_eq!(nav.pending_path.as_deref(), Some("/contacts/abc"));
        assert!(nav.loading());
    }

    #[test]
    fn pending_query_without_navigation_is_ignored() {
        let nav = NavigationState {
            is_navigating: false,
            pending_query: Some("x".into()),
            pending_path: None,
        };
        assert!(!nav.searching());
        assert!(!nav.loading());
    }
}
