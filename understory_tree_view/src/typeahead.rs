// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-ahead search over the visible order.

use smallvec::SmallVec;

/// Default time window in milliseconds between characters of one search.
pub const DEFAULT_TYPEAHEAD_TIMEOUT_MS: u64 = 500;

/// Rolling buffer of recently typed characters.
///
/// Timestamps are milliseconds supplied by the caller; the buffer never reads
/// a clock. A character arriving `timeout` ms or more after the previous one
/// starts a new search.
#[derive(Clone, Debug)]
pub struct TypeAhead {
    buffer: SmallVec<[char; 16]>,
    last_input: Option<u64>,
    timeout: u64,
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new(DEFAULT_TYPEAHEAD_TIMEOUT_MS)
    }
}

impl TypeAhead {
    /// Create an empty buffer with the given timeout in milliseconds.
    pub fn new(timeout: u64) -> Self {
        Self {
            buffer: SmallVec::new(),
            last_input: None,
            timeout,
        }
    }

    /// Timeout in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Characters currently buffered.
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// Append `c` typed at `now`, first dropping a buffer whose window elapsed.
    pub fn push(&mut self, c: char, now: u64) {
        self.expire(now);
        self.buffer.push(c);
        self.last_input = Some(now);
    }

    /// Drop the buffer if the window elapsed at `now`. Returns `true` if it did.
    pub fn expire(&mut self, now: u64) -> bool {
        match self.last_input {
            Some(last) if now.saturating_sub(last) >= self.timeout => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Drop the buffer immediately.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }

    /// The term to match against labels.
    ///
    /// A buffer of one repeated character searches for that character alone,
    /// so pressing the same key again cycles through matches.
    pub fn term(&self) -> &[char] {
        match self.buffer.split_first() {
            Some((first, rest)) if rest.iter().all(|c| c == first) => &self.buffer[..1],
            _ => &self.buffer,
        }
    }

    /// Find the next item after `current` whose label starts with the term.
    ///
    /// The scan starts just after `current` and wraps to the start of
    /// `order`, ending on `current` itself. Without a current position the
    /// scan starts at the beginning. Items without a label never match.
    pub fn search<'o, 'r, K>(
        &self,
        order: &'o [K],
        current: Option<usize>,
        label_of: impl Fn(&K) -> Option<&'r str>,
    ) -> Option<&'o K> {
        let term = self.term();
        if term.is_empty() || order.is_empty() {
            return None;
        }
        let start = current.map_or(0, |i| (i + 1) % order.len());
        (start..order.len())
            .chain(0..start)
            .map(|i| &order[i])
            .find(|id| label_of(id).is_some_and(|label| starts_with_ignore_case(label, term)))
    }
}

fn starts_with_ignore_case(label: &str, term: &[char]) -> bool {
    let mut label = label.chars().flat_map(char::to_lowercase);
    term.iter()
        .flat_map(|c| c.to_lowercase())
        .all(|t| label.next() == Some(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: [&str; 3] = ["Apple", "Banana", "Avocado"];

    fn label(id: &&'static str) -> Option<&'static str> {
        Some(*id)
    }

    #[test]
    fn repeated_character_cycles_with_wrap() {
        let mut ta = TypeAhead::default();
        ta.push('a', 0);
        let hit = ta.search(&FRUIT, Some(0), label);
        assert_eq!(hit, Some(&"Avocado"));
        ta.push('a', 100);
        assert_eq!(ta.term(), &['a']);
        let hit = ta.search(&FRUIT, Some(2), label);
        assert_eq!(hit, Some(&"Apple"));
    }

    #[test]
    fn multi_character_prefix_is_case_insensitive() {
        let mut ta = TypeAhead::default();
        ta.push('B', 0);
        ta.push('a', 10);
        ta.push('N', 20);
        assert_eq!(ta.search(&FRUIT, Some(0), label), Some(&"Banana"));
        ta.push('x', 30);
        assert_eq!(ta.search(&FRUIT, Some(0), label), None);
    }

    #[test]
    fn buffer_resets_after_timeout() {
        let mut ta = TypeAhead::new(500);
        ta.push('b', 0);
        ta.push('a', 499);
        assert_eq!(ta.buffer(), &['b', 'a']);
        ta.push('a', 999);
        assert_eq!(ta.buffer(), &['a']);
        assert!(!ta.expire(1498));
        assert!(ta.expire(1499));
        assert!(ta.buffer().is_empty());
    }

    #[test]
    fn no_current_scans_from_start() {
        let mut ta = TypeAhead::default();
        ta.push('a', 0);
        assert_eq!(ta.search(&FRUIT, None, label), Some(&"Apple"));
        let empty: [&str; 0] = [];
        assert_eq!(ta.search(&empty, None, label), None);
    }

    #[test]
    fn sole_match_keeps_current() {
        let mut ta = TypeAhead::default();
        ta.push('b', 0);
        assert_eq!(ta.search(&FRUIT, Some(1), label), Some(&"Banana"));
    }
}
