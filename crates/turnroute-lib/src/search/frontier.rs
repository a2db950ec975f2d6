use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::state::State;

/// Open set of discovered, not-yet-expanded states.
///
/// Entries are served in ascending `f` order; ties break by insertion
/// order, earliest pushed first, so repeated runs pop in an identical
/// sequence. A map from state to its best known `g` implements the
/// dominance check: an insert for a state already held with an equal or
/// lower `g` is discarded. Superseded heap entries are not removed
/// eagerly; the expansion loop skips them via its closed set on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    best_g: HashMap<State, usize>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue the node stored at `index` in the search arena, unless a
    /// node for the same state with `g <=` this one is already known.
    /// Returns whether the entry was accepted.
    pub(crate) fn insert(&mut self, state: State, g: usize, f: usize, index: usize) -> bool {
        if let Some(&known) = self.best_g.get(&state) {
            if known <= g {
                return false;
            }
        }
        self.best_g.insert(state, g);
        self.heap.push(Entry {
            f,
            seq: self.next_seq,
            index,
        });
        self.next_seq += 1;
        true
    }

    /// Remove and return the arena index of a minimum-`f` entry.
    pub(crate) fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.index)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: usize,
    seq: u64,
    index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap on f, with
        // the earliest-inserted entry winning among equal f values.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
