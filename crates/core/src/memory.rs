//! Agent memory.

use crate::Task;
use serde::{Deserialize, Serialize};

/// Which store a remembered fact goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Horizon {
    /// Working memory, subject to trimming
    #[default]
    ShortTerm,
    /// Kept for the life of the agent
    LongTerm,
}

/// Two-tier ordered memory.
///
/// Short-term memory holds what an agent did recently and is trimmed by
/// [`Memory::retain_recent`]. Long-term memory is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory<T = Task> {
    short_term: Vec<T>,
    long_term: Vec<T>,
}

impl<T> Memory<T> {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self {
            short_term: Vec::new(),
            long_term: Vec::new(),
        }
    }

    /// Append a fact to the chosen store.
    pub fn remember(&mut self, fact: T, horizon: Horizon) {
        match horizon {
            Horizon::ShortTerm => self.short_term.push(fact),
            Horizon::LongTerm => self.long_term.push(fact),
        }
    }

    /// Keep only the last `n` short-term entries, in their original order.
    pub fn retain_recent(&mut self, n: usize) {
        let excess = self.short_term.len().saturating_sub(n);
        self.short_term.drain(..excess);
    }

    /// Short-term entries, oldest first.
    pub fn short_term(&self) -> &[T] {
        &self.short_term
    }

    /// Long-term entries, oldest first.
    pub fn long_term(&self) -> &[T] {
        &self.long_term
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_routes_by_horizon() {
        let mut memory = Memory::new();
        memory.remember("a", Horizon::ShortTerm);
        memory.remember("b", Horizon::LongTerm);
        memory.remember("c", Horizon::default());

        assert_eq!(memory.short_term(), &["a", "c"]);
        assert_eq!(memory.long_term(), &["b"]);
    }

    #[test]
    fn test_retain_recent_keeps_tail_in_order() {
        let mut memory = Memory::new();
        for i in 0..8 {
            memory.remember(i, Horizon::ShortTerm);
        }
        memory.retain_recent(3);
        assert_eq!(memory.short_term(), &[5, 6, 7]);
    }

    #[test]
    fn test_retain_recent_leaves_long_term_alone() {
        let mut memory = Memory::new();
        for i in 0..4 {
            memory.remember(i, Horizon::LongTerm);
            memory.remember(i, Horizon::ShortTerm);
        }
        memory.retain_recent(0);
        assert!(memory.short_term().is_empty());
        assert_eq!(memory.long_term().len(), 4);
    }

    #[test]
    fn test_retain_recent_on_short_memory_is_noop() {
        let mut memory = Memory::new();
        memory.remember("only", Horizon::ShortTerm);
        memory.retain_recent(5);
        assert_eq!(memory.short_term(), &["only"]);
    }
}
