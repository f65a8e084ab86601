//! The grammar: an indexed collection of rules keyed by left-hand side.
//!
//! Grounded on the teacher library's split between a mutable builder
//! (`RuleBuilder`/`ContextFree::rule`, `cfg-grammar/src/rule/builder.rs`) and
//! an immutable grammar value -- here, `GrammarBuilder` accumulates rules
//! from `(probability, lhs, rhs)` triples and `build()` freezes them into a
//! `Grammar`, rather than exposing public mutators on `Grammar` itself.

use std::collections::HashMap;

use crate::error::GrammarError;
use crate::rule::{Rule, RuleId};
use crate::symbol::{Symbol, SymbolInterner};

/// A weighted context-free grammar: a start symbol plus every rule, indexed
/// by left-hand side.
///
/// Immutable once built (spec.md §3's "Immutable after construction").
/// Invariant maintained by `GrammarBuilder::build`: every rule's lhs is a key
/// in `expansions`, even if that rule is the only one with that lhs.
#[derive(Debug)]
pub struct Grammar {
    start_symbol: Symbol,
    interner: SymbolInterner,
    rules: Vec<Rule>,
    expansions: HashMap<Symbol, Vec<RuleId>>,
}

impl Grammar {
    /// All rules with the given left-hand side, in the order they were added.
    /// Empty for any symbol that never appears as an lhs (i.e. a terminal).
    pub fn expansions(&self, lhs: Symbol) -> impl Iterator<Item = &Rule> {
        let ids = self.expansions.get(&lhs).map(Vec::as_slice).unwrap_or(&[]);
        ids.iter().map(move |id| &self.rules[id.usize()])
    }

    /// Rule ids with the given left-hand side, in the order they were added.
    /// Used by the engine, which needs a `RuleId` to stash in each `Item`
    /// rather than a borrowed `&Rule`.
    pub fn expansion_ids(&self, lhs: Symbol) -> &[RuleId] {
        self.expansions.get(&lhs).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True iff `sym` has at least one rule expanding it.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.expansions
            .get(&sym)
            .map(|rules| !rules.is_empty())
            .unwrap_or(false)
    }

    /// The grammar's designated start symbol.
    pub fn start_symbol(&self) -> Symbol {
        self.start_symbol
    }

    /// Looks up a rule by id. Used by the engine to avoid cloning rules into
    /// every `Item`.
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.usize()]
    }

    /// Resolves a symbol name to its interned `Symbol`, if any rule mentions
    /// it (as lhs or rhs) or it was otherwise interned while building.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.interner.get(name)
    }

    /// The text a symbol was interned from.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.interner.name_of(sym)
    }
}

/// Accumulates rules from `(probability, lhs, rhs)` triples, converting
/// probabilities to weights and rejecting out-of-range ones, then freezes
/// the result into a `Grammar`.
pub struct GrammarBuilder {
    start_symbol_name: String,
    interner: SymbolInterner,
    rules: Vec<Rule>,
    expansions: HashMap<Symbol, Vec<RuleId>>,
}

impl GrammarBuilder {
    /// Starts building a grammar with the given start symbol name.
    pub fn new(start_symbol: &str) -> Self {
        let mut interner = SymbolInterner::new();
        interner.intern(start_symbol);
        GrammarBuilder {
            start_symbol_name: start_symbol.to_string(),
            interner,
            rules: Vec::new(),
            expansions: HashMap::new(),
        }
    }

    /// Adds one rule, converting `probability` to a weight via `-log2(p)`.
    ///
    /// Returns `GrammarError::InvalidProbability` if `probability` is not in
    /// `(0, 1]`.
    pub fn add_rule(
        &mut self,
        probability: f64,
        lhs: &str,
        rhs: &[&str],
    ) -> Result<(), GrammarError> {
        if !(probability > 0.0 && probability <= 1.0) {
            return Err(GrammarError::InvalidProbability {
                lhs: lhs.to_string(),
                probability,
            });
        }
        let weight = -probability.log2();
        let lhs_sym = self.interner.intern(lhs);
        let rhs_syms: Vec<Symbol> = rhs.iter().map(|s| self.interner.intern(s)).collect();

        let id = RuleId(self.rules.len() as u32);
        self.rules.push(Rule::new(lhs_sym, rhs_syms, weight));
        self.expansions.entry(lhs_sym).or_default().push(id);
        Ok(())
    }

    /// Freezes the accumulated rules into an immutable `Grammar`.
    ///
    /// Ensures the start symbol (and every lhs seen) has an entry in
    /// `expansions`, even if empty, so `expansions()` never needs a special
    /// case for "never inserted into."
    pub fn build(mut self) -> Grammar {
        let start_symbol = self.interner.intern(&self.start_symbol_name);
        self.expansions.entry(start_symbol).or_default();
        Grammar {
            start_symbol,
            interner: self.interner,
            rules: self.rules,
            expansions: self.expansions,
        }
    }
}
