//! Interned grammar symbols.
//!
//! A [`Symbol`] is an opaque numeric handle into a [`SymbolInterner`]. Whether
//! a symbol is a terminal or a nonterminal is never encoded in the symbol
//! itself -- it is purely a property of which `Grammar` you ask (see
//! `Grammar::is_nonterminal`). This mirrors the teacher library's
//! `SymbolSource`, which hands out `Copy` numeric ids rather than interned
//! strings, but folds in name lookup (grounded on `cfg-load::StringInterner`)
//! since this crate has no separate lexicon type to carry names elsewhere.

use std::collections::HashMap;
use std::fmt;

/// A numeric handle for an interned symbol name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Casts the symbol's id to `usize`, e.g. for indexing a parallel table.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Owns the mapping between symbol text and the numeric ids used internally.
///
/// All grammars constructed from the same source text share one interner, so
/// that `Symbol` values compare equal across e.g. lhs and rhs occurrences of
/// the same name.
#[derive(Clone, Debug, Default)]
pub struct SymbolInterner {
    names: Vec<String>,
    ids: HashMap<String, Symbol>,
}

impl SymbolInterner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        SymbolInterner::default()
    }

    /// Returns the symbol for `name`, allocating a new id if it hasn't been
    /// seen before.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.ids.get(name) {
            return sym;
        }
        let sym = Symbol(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), sym);
        sym
    }

    /// Returns the symbol already assigned to `name`, if any, without
    /// allocating one.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.ids.get(name).copied()
    }

    /// Looks up the text a symbol was interned from.
    ///
    /// Panics if `sym` was not produced by this interner -- that would be an
    /// internal invariant violation, never reachable from valid input.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// Number of distinct symbols interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no symbol has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut interner = SymbolInterner::new();
        let a = interner.intern("NP");
        let b = interner.intern("VP");
        let a_again = interner.intern("NP");
        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(interner.name_of(a), "NP");
        assert_eq!(interner.name_of(b), "VP");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn get_does_not_allocate() {
        let mut interner = SymbolInterner::new();
        interner.intern("ROOT");
        assert_eq!(interner.get("ROOT").map(Symbol::usize), Some(0));
        assert!(interner.get("NOPE").is_none());
    }
}
