use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::lmax_assert_simple;

/// A stack of entries partitioned into decision levels. Backtracking to a level hands back the
/// entries of the undone levels, most recent first, so their effects can be reverted.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_decision_level: usize,
    /// At index i is the position where the i-th decision level ends (exclusive) on the trail
    level_delimiters: Vec<usize>,
    entries: Vec<T>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_decision_level: 0,
            level_delimiters: Vec::default(),
            entries: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.level_delimiters.push(self.entries.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.current_decision_level
    }

    /// Removes every entry above `new_decision_level` and returns them in reverse order of
    /// insertion.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        lmax_assert_simple!(new_decision_level < self.current_decision_level);

        let new_trail_len = self.level_delimiters[new_decision_level];

        self.current_decision_level = new_decision_level;
        self.level_delimiters.truncate(new_decision_level);
        self.entries.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}
