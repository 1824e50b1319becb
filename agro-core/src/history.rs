//! Address fragment and session history.

use serde::Serialize;

/// The shareable part of console state: a fragment plus a back/forward stack.
///
/// Mirrors the subset of browser history the console relies on. `push`
/// creates a navigable entry, `replace` rewrites the current one in place.
pub trait History {
    /// Current fragment without the leading `#`. `None` when absent.
    fn fragment(&self) -> Option<&str>;

    /// Add a new entry carrying `fragment` and make it current.
    fn push_fragment(&mut self, fragment: &str);

    /// Rewrite the current entry's fragment without adding an entry.
    fn replace_fragment(&mut self, fragment: Option<&str>);
}

/// In-memory history stack.
///
/// Pushing while not at the newest entry discards the forward entries, the
/// same way a browser does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStack {
    entries: Vec<Option<String>>,
    cursor: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    /// A stack holding one entry with no fragment.
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            cursor: 0,
        }
    }

    /// A stack whose initial entry carries `fragment`, as when a deep link is
    /// opened directly.
    pub fn with_fragment(fragment: Option<&str>) -> Self {
        Self {
            entries: vec![normalize(fragment)],
            cursor: 0,
        }
    }

    /// Step back one entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Address as displayed in the console's location bar.
    pub fn location(&self, base: &str) -> String {
        match self.fragment() {
            Some(fragment) => format!("{base}#{fragment}"),
            None => base.to_string(),
        }
    }
}

impl History for HistoryStack {
    fn fragment(&self) -> Option<&str> {
        self.entries[self.cursor].as_deref()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(normalize(Some(fragment)));
        self.cursor += 1;
    }

    fn replace_fragment(&mut self, fragment: Option<&str>) {
        self.entries[self.cursor] = normalize(fragment);
    }
}

fn normalize(fragment: Option<&str>) -> Option<String> {
    fragment
        .map(|f| f.strip_prefix('#').unwrap_or(f))
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}
