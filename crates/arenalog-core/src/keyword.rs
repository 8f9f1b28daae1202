//! Event keyword matching for client log lines.
//!
//! Relevant log lines embed a directional marker (`<== `) followed by an
//! event name such as `PlayerInventory.GetPlayerCardsV3`. Matching is
//! whole-word: a keyword that is a prefix of a longer identifier in the log
//! (`Deck.GetDeckLists` vs `Deck.GetDeckListsV3`) must not match.

use crate::error::{Error, Result};

/// Directional marker preceding inbound event names in the client log
pub const EVENT_MARKER: &str = "<== ";

/// A literal event marker to search for in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    text: String,
}

impl Keyword {
    /// Create a keyword from a raw literal, matched exactly as given
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        Ok(Self { text })
    }

    /// Create a keyword for an inbound event name, prefixing the marker
    pub fn event(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        Self::new(format!("{EVENT_MARKER}{name}"))
    }

    /// The literal text this keyword matches
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Find a whole-word occurrence of this keyword in `line`.
    ///
    /// Returns the byte offset just past the occurrence, so callers can
    /// treat the remainder of the line as block content.
    pub fn find_in(&self, line: &str) -> Option<usize> {
        let mut search_from = 0;
        while let Some(pos) = line[search_from..].find(&self.text) {
            let start = search_from + pos;
            let end = start + self.text.len();
            if is_boundary(line, start, end) {
                return Some(end);
            }
            search_from = start + 1;
        }
        None
    }
}

/// Check that a match at `[start, end)` sits on word boundaries.
///
/// Word characters are alphanumerics, `_` and `.` -- the characters event
/// identifiers are built from. `Deck.GetDeckLists` immediately followed by
/// `V3` is therefore not a boundary.
fn is_boundary(line: &str, start: usize, end: usize) -> bool {
    let before = line[..start].chars().next_back();
    let after = line[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}
