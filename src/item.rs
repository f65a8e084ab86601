//! Earley items and the arena that owns them.
//!
//! Grounded on spec.md §3/§9's arena design note: the `Chart` (see
//! `chart.rs`) is the sole owner of every `Item`, stored per-column in a
//! `Vec<Item>`; back-pointers are non-owning `ItemId`s rather than
//! references, so the back-pointer DAG needs no lifetimes and is dropped
//! trivially with the `Chart`. This plays the same role the teacher
//! library's `History`/`RuleDot` machinery plays for its Earley history
//! (`src/earley/history.rs`), but as a concrete, non-generic type since this
//! crate has exactly one kind of payload to track (weight and children), not
//! a pluggable history trait.

use smallvec::SmallVec;

use crate::rule::RuleId;

/// Index of an `Item` within a `Chart`: which column it lives in, and its
/// position within that column's arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemId {
    pub column: u32,
    pub index: u32,
}

/// One element of an `Item`'s back-pointer list: either a reference to a
/// completed child `Item` (ATTACH), or a sentinel recording that a terminal
/// was scanned at a given column (SCAN).
#[derive(Copy, Clone, Debug)]
pub enum BackPointer {
    /// A completed item that witnessed one rhs symbol.
    Item(ItemId),
    /// A terminal consumed at this column (the token itself is looked up by
    /// the tree builder from the input vector).
    Terminal(u32),
}

/// The identity of an item for duplicate detection: the tuple spec.md §3
/// says dedup must key on. Weight and back-pointers are the relaxable
/// payload, excluded here on purpose.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemKey {
    pub rule: RuleId,
    pub dot_position: u32,
    pub start_position: u32,
}

/// A partially (or fully) matched rule at a given start position, with its
/// current best weight and the back-pointers that witness that weight.
#[derive(Clone, Debug)]
pub struct Item {
    pub rule: RuleId,
    pub dot_position: u32,
    pub start_position: u32,
    pub weight: f64,
    /// One entry per rhs symbol already consumed; `len() == dot_position`.
    pub backpointers: SmallVec<[BackPointer; 4]>,
}

impl Item {
    /// The key used for dedup/relaxation in the owning column's `Agenda`.
    #[inline]
    pub fn key(&self) -> ItemKey {
        ItemKey {
            rule: self.rule,
            dot_position: self.dot_position,
            start_position: self.start_position,
        }
    }

    /// True when the dot has reached the end of the rule's rhs.
    #[inline]
    pub fn is_complete(&self, rhs_len: usize) -> bool {
        self.dot_position as usize == rhs_len
    }
}
