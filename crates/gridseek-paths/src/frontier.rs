//! The open list: discovered nodes not yet finalized, ordered by rank.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use gridseek_core::Point;

/// Composite ordering key for the frontier: `f`, then `x`, then `y`.
///
/// Two distinct cells never compare equal, so a set keyed by `Rank` never
/// merges entries with identical `f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rank {
    pub f: i32,
    pub pos: Point,
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.pos.x.cmp(&other.pos.x))
            .then(self.pos.y.cmp(&other.pos.y))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered set of candidate cells with coordinate-identity membership.
#[derive(Debug, Default)]
pub struct Frontier {
    ranked: BTreeSet<Rank>,
    members: HashSet<Point>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `pos` with total cost `f`. Returns `false` and leaves the
    /// frontier unchanged if `pos` is already present, whatever its cost.
    pub fn insert(&mut self, pos: Point, f: i32) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        self.ranked.insert(Rank { f, pos });
        true
    }

    /// Remove and return the lowest-ranked cell.
    pub fn extract_min(&mut self) -> Option<Rank> {
        let min = self.ranked.pop_first()?;
        self.members.remove(&min.pos);
        Some(min)
    }

    /// The lowest-ranked cell, without removing it.
    pub fn peek_min(&self) -> Option<Rank> {
        self.ranked.first().copied()
    }

    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.members.contains(&pos)
    }

    pub fn clear(&mut self) {
        self.ranked.clear();
        self.members.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
