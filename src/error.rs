//! Error types for grammar construction and loading.
//!
//! Grounded on the `thiserror`-derived error enums used throughout the
//! example pack (e.g. `Hasenn-dokearley`, `azazo1-auto_canonical_lr1`) rather
//! than hand-rolled `Display`/`Error` impls like the original Python's bare
//! exceptions or the teacher library's panics-on-bad-input style.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while building a `Grammar` from a probability
/// source, or while loading one from a file.
///
/// `ParseNoDerivation` (spec.md §7) is deliberately absent here: it isn't an
/// error, it's the `None` case of `Chart::goal_item`.
/// `InternalInvariantViolation` is likewise absent: those are asserted, not
/// returned, since they indicate a bug rather than a recoverable condition.
#[derive(thiserror::Error, Debug)]
pub enum GrammarError {
    /// A rule's probability was not in `(0, 1]`.
    #[error("invalid probability {probability} for rule `{lhs}` (must be in (0, 1])")]
    InvalidProbability { lhs: String, probability: f64 },

    /// A grammar-file line didn't have the shape `probability<TAB>lhs<TAB>rhs`.
    #[error("{path}:{line}: {reason}")]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The grammar or sentence file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
