//! Location string codec
//!
//! The full navigation state lives in a location string of the form
//! `path[?query][#fragment]`, with the token sequence comma-joined under the
//! single query key `state`. Re-serializing replaces the `state` parameter in
//! place, preserving every other parameter and their order, and keeps the
//! fragment where it was.

use std::fmt;

/// Query key holding the comma-joined token sequence.
pub const STATE_PARAM: &str = "state";

/// A location string: `path[?query][#fragment]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    raw: String,
}

impl Location {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Split into (before-query, query-without-`?`, fragment-with-`#`).
    fn split(&self) -> (&str, Option<&str>, &str) {
        let (without_fragment, fragment) = match self.raw.find('#') {
            Some(pos) => self.raw.split_at(pos),
            None => (self.raw.as_str(), ""),
        };
        match without_fragment.find('?') {
            Some(pos) => (
                &without_fragment[..pos],
                Some(&without_fragment[pos + 1..]),
                fragment,
            ),
            None => (without_fragment, None, fragment),
        }
    }

    /// The token sequence encoded in the `state` parameter, defaulting to
    /// the single token `"0"` when the parameter is absent.
    pub fn state_tokens(&self) -> Vec<String> {
        let (_, query, _) = self.split();
        let state = query
            .into_iter()
            .flat_map(|q| q.split('&'))
            .find_map(|item| item.strip_prefix("state="))
            .unwrap_or("0");
        state.split(',').map(|t| t.to_string()).collect()
    }

    /// Re-serialize with a new token sequence under the `state` key.
    pub fn with_state(&self, tokens: &[String]) -> Location {
        let new_param = format!("{}={}", STATE_PARAM, tokens.join(","));
        let (path, query, fragment) = self.split();
        let query = match query {
            None => new_param,
            Some(q) => {
                let mut items: Vec<&str> = q.split('&').collect();
                let mut found = false;
                for item in items.iter_mut() {
                    if item.split('=').next() == Some(STATE_PARAM) {
                        *item = &new_param;
                        found = true;
                    }
                }
                if !found {
                    items.push(&new_param);
                }
                items.join("&")
            }
        };
        Location::new(format!("{}?{}{}", path, query, fragment))
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new("/")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
