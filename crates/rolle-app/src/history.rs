//! Application-owned navigation history
//!
//! The browser history stack made explicit: an ordered list of location
//! strings and a position. Pushing drops any forward entries; `back` and
//! `forward` move the position and hand back the location to re-derive the
//! token store from (the popstate analog). Change detection is the cursor's
//! job, not History's -- whatever gets pushed is recorded.

use rolle_core::Location;

/// Ordered list of visited locations with a current position.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    pos: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            pos: 0,
        }
    }

    /// The location at the current position.
    pub fn current(&self) -> &Location {
        &self.entries[self.pos]
    }

    /// Push a new entry, dropping anything forward of the current position.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.pos + 1);
        self.entries.push(location);
        self.pos += 1;
    }

    /// Step back one entry; `None` when already at the oldest.
    pub fn back(&mut self) -> Option<&Location> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        Some(&self.entries[self.pos])
    }

    /// Step forward one entry; `None` when already at the newest.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.pos + 1 >= self.entries.len() {
            return None;
        }
        self.pos += 1;
        Some(&self.entries[self.pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::new(s)
    }

    #[test]
    fn test_starts_with_initial_entry() {
        let h = History::new(loc("/?state=0"));
        assert_eq!(h.len(), 1);
        assert_eq!(h.current().as_str(), "/?state=0");
    }

    #[test]
    fn test_push_advances() {
        let mut h = History::new(loc("/?state=0"));
        h.push(loc("/?state=1"));
        assert_eq!(h.len(), 2);
        assert_eq!(h.current().as_str(), "/?state=1");
    }

    #[test]
    fn test_back_and_forward() {
        let mut h = History::new(loc("/?state=0"));
        h.push(loc("/?state=0,place5"));

        assert_eq!(h.back().unwrap().as_str(), "/?state=0");
        assert!(h.back().is_none());
        assert_eq!(h.forward().unwrap().as_str(), "/?state=0,place5");
        assert!(h.forward().is_none());
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut h = History::new(loc("/?state=0"));
        h.push(loc("/?state=1"));
        h.push(loc("/?state=2"));
        h.back();
        h.back();
        h.push(loc("/?state=0,place5"));

        assert_eq!(h.len(), 2);
        assert_eq!(h.current().as_str(), "/?state=0,place5");
        assert!(h.forward().is_none());
    }
}
