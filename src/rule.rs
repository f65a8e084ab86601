//! Grammar rules.
//!
//! A rule pairs a left-hand side symbol with an ordered right-hand side and
//! the nonnegative weight of using it, following the teacher library's
//! `Rule { lhs, rhs, history }` shape (`cfg-grammar/src/rule/mod.rs`), with
//! `weight: f64` standing in for the generic `history` payload since this
//! crate has no need for the teacher's pluggable history machinery.

use crate::symbol::Symbol;

/// A single production of a weighted context-free grammar.
///
/// Immutable once built: there are no public mutators, matching spec.md's
/// "Immutable once constructed." `weight` is excluded from `PartialEq`/`Hash`
/// derivation on purpose -- `Rule` does not derive either, since the only
/// identity comparisons this crate performs are on `(RuleId, dot_position,
/// start_position)` triples (see `item.rs`), never on `Rule` values
/// themselves, so there's no need to contend with `f64`'s lack of `Eq`.
#[derive(Clone, Debug)]
pub struct Rule {
    lhs: Symbol,
    rhs: Vec<Symbol>,
    weight: f64,
}

impl Rule {
    /// Creates a new rule. `weight` must already be `-log2(probability)` and
    /// finite and nonnegative; callers (the grammar loader) are responsible
    /// for validating the source probability before calling this.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>, weight: f64) -> Self {
        debug_assert!(weight >= 0.0 && weight.is_finite());
        Rule { lhs, rhs, weight }
    }

    /// The rule's left-hand side.
    #[inline]
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    /// The rule's right-hand side, in order.
    #[inline]
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// The rule's own weight, i.e. `-log2(probability)`.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Index of a [`Rule`] within a `Grammar`'s flat rule table.
///
/// Kept distinct from `usize` so call sites can't accidentally mix it up
/// with a column or dot position.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RuleId(pub(crate) u32);

impl RuleId {
    #[inline]
    pub(crate) fn usize(self) -> usize {
        self.0 as usize
    }
}
