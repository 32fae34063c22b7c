//! Bounded buffer of recent log lines.

use std::collections::VecDeque;

/// The most recent `capacity` event lines, oldest first.
///
/// Pushing onto a full history evicts the oldest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHistory {
    lines:    VecDeque<String>,
    capacity: usize,
}

impl LogHistory {
    /// An empty history holding at most `capacity` lines (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The newest line, if any.
    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Lines oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }
}
