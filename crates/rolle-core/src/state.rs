//! Shared token store and cursor
//!
//! The navigation state is an ordered sequence of tokens shared by every
//! component of the panel tree. A [`Cursor`] pairs a handle to that shared
//! sequence with an index; `next()` yields a new cursor over the *same*
//! sequence, so a write through any cursor is observed by all of them.
//! Each panel element consumes exactly one token and hands the advanced
//! cursor to its children.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::location::Location;
use crate::token::TypeId;

/// Shared, mutable ordered sequence of navigation tokens.
///
/// Cloning the store clones the handle, not the sequence.
#[derive(Clone, Default)]
pub struct TokenStore {
    tokens: Rc<RefCell<Vec<String>>>,
}

impl TokenStore {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: Rc::new(RefCell::new(tokens)),
        }
    }

    /// Build a store from a location's `state` query parameter.
    pub fn from_location(location: &Location) -> Self {
        Self::new(location.state_tokens())
    }

    /// Cursor at index 0, the root of the update cascade.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            store: self.clone(),
            index: 0,
        }
    }

    /// Snapshot of the current token sequence.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tokens.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.borrow().is_empty()
    }

    /// True when both handles refer to the same underlying sequence.
    pub fn same_store(&self, other: &TokenStore) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens)
    }

    fn get(&self, index: usize) -> Option<String> {
        self.tokens.borrow().get(index).cloned()
    }

    fn set(&self, index: usize, value: String) -> bool {
        let mut tokens = self.tokens.borrow_mut();
        if tokens.len() <= index {
            tokens.resize_with(index + 1, String::new);
        }
        if tokens[index] == value {
            return false;
        }
        tokens[index] = value;
        true
    }

    fn truncate_and_extend(&self, index: usize, values: &[String]) {
        let mut tokens = self.tokens.borrow_mut();
        tokens.truncate(index);
        tokens.extend_from_slice(values);
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenStore")
            .field(&*self.tokens.borrow())
            .finish()
    }
}

/// A (shared sequence, index) pair threading "the next unconsumed token"
/// through nested panel elements.
#[derive(Debug, Clone)]
pub struct Cursor {
    store: TokenStore,
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// The token at this cursor's position, `None` past the end.
    pub fn value(&self) -> Option<String> {
        self.store.get(self.index)
    }

    /// Write the token at this cursor's position, growing the sequence with
    /// empty tokens if the index is past the end.
    ///
    /// Returns `true` iff the stored value changed. The caller performs the
    /// location sync exactly when this returns true; an equal write is a
    /// no-op with no history push.
    pub fn set(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.store.set(self.index, value);
        if changed {
            tracing::debug!(index = self.index, tokens = ?self.store, "state change");
        }
        changed
    }

    /// Truncate the sequence to this cursor's index, then append the given
    /// values. Truncation always counts as a change: the caller syncs the
    /// location unconditionally, even if the new tail equals the old one.
    pub fn replace(&self, values: &[String]) {
        self.store.truncate_and_extend(self.index, values);
        tracing::debug!(index = self.index, tokens = ?self.store, "state replace");
    }

    /// New cursor at index + 1 over the same underlying sequence.
    pub fn next(&self) -> Cursor {
        Cursor {
            store: self.store.clone(),
            index: self.index + 1,
        }
    }

    /// Parse the current token into its tag/id parts, `None` when there is
    /// no token at this depth.
    pub fn type_id(&self) -> Option<TypeId> {
        self.value().map(|v| TypeId::parse(&v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(tokens: &[&str]) -> TokenStore {
        TokenStore::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_next_shares_the_sequence() {
        let s = store(&["0", "place5"]);
        let cursor = s.cursor();
        let next = cursor.next();
        assert!(next.store().same_store(cursor.store()));
        assert_eq!(next.index(), cursor.index() + 1);
    }

    #[test]
    fn test_mutation_visible_through_all_cursors() {
        let s = store(&["0", "place5"]);
        let a = s.cursor().next();
        let b = s.cursor().next();
        assert!(a.set("place9"));
        assert_eq!(b.value().as_deref(), Some("place9"));
        assert_eq!(s.tokens(), vec!["0", "place9"]);
    }

    #[test]
    fn test_value_past_the_end() {
        let s = store(&["0"]);
        assert_eq!(s.cursor().next().value(), None);
        assert_eq!(s.cursor().next().type_id(), None);
    }

    #[test]
    fn test_set_equal_value_is_no_change() {
        let s = store(&["0", "place5"]);
        assert!(!s.cursor().set("0"));
        assert!(s.cursor().set("1"));
        assert!(!s.cursor().set("1"));
    }

    #[test]
    fn test_set_past_the_end_grows_sequence() {
        let s = store(&["0"]);
        let c = s.cursor().next().next();
        assert!(c.set("character7"));
        assert_eq!(s.tokens(), vec!["0", "", "character7"]);
    }

    #[test]
    fn test_set_keeps_deeper_tokens() {
        // Switching a tab does not truncate the drill-down tail.
        let s = store(&["0", "place5"]);
        assert!(s.cursor().set("1"));
        assert_eq!(s.tokens(), vec!["1", "place5"]);
    }

    #[test]
    fn test_replace_truncates_tail() {
        let s = store(&["0", "place5", "1", "character7"]);
        s.cursor().next().replace(&["character2".to_string()]);
        assert_eq!(s.tokens(), vec!["0", "character2"]);
    }

    #[test]
    fn test_replace_with_identical_tail() {
        // Truncation counts as a change even when the values match.
        let s = store(&["0", "place5"]);
        s.cursor().next().replace(&["place5".to_string()]);
        assert_eq!(s.tokens(), vec!["0", "place5"]);
    }

    #[test]
    fn test_type_id_of_current_token() {
        let s = store(&["0", "place5"]);
        let t = s.cursor().next().type_id().unwrap();
        assert_eq!(t.tag, "place");
        assert_eq!(t.id, 5);

        let t = s.cursor().type_id().unwrap();
        assert_eq!(t.tag, "");
        assert_eq!(t.id, 0);
    }

    #[test]
    fn test_from_location() {
        let loc = Location::new("/?state=0,place5");
        let s = TokenStore::from_location(&loc);
        assert_eq!(s.tokens(), vec!["0", "place5"]);
    }
}
