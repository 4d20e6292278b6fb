/// Component-local state of the search box.
///
/// The first search of a session pushes a history entry; every later one
/// replaces it so that typing does not stack one entry per keystroke. The
/// session is rendered into the search form as `data-history` and the
/// browser script flips it to `replace` after its first submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    has_searched: bool,
}

/// How the next search submission updates browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

impl HistoryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryMode::Push => "push",
            HistoryMode::Replace => "replace",
        }
    }
}

impl SearchSession {
    /// Seeded from the `q` the page was rendered with: a page that already
    /// carries a query counts as having searched.
    pub fn new(q: Option<&str>) -> Self {
        Self {
            has_searched: q.is_some(),
        }
    }

    pub fn history_mode(&self) -> HistoryMode {
        if self.has_searched {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        }
    }
}
