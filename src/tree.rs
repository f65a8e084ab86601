//! Derivation trees built from a goal item's back-pointer graph.
//!
//! Grounded on `parse.py::EarleyChart._build_tree`/`format_tree`: a recursive
//! walk of the backpointer structure into a labeled tree, then a recursive
//! render into the parenthesized output format from spec.md §6. The Rust
//! `Tree` type folds both steps' data into one structured value rather than
//! the original's untyped nested tuples.

use std::fmt;

use crate::chart::Chart;
use crate::item::{BackPointer, Item};

/// A node of a derivation tree: either an interior node labeled by a
/// nonterminal with child subtrees, or a preterminal leaf labeled by the
/// rule it came from, wrapping the single input token it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// A nonterminal node with its (possibly empty, for an epsilon rule)
    /// children.
    Node { label: String, children: Vec<Tree> },
    /// A preterminal node covering exactly one input token, e.g. `(N dog)`.
    Leaf { label: String, token: String },
}

impl Tree {
    /// Builds the derivation tree rooted at `item`, the chart's goal item.
    ///
    /// Mirrors `_build_tree`: a completed item with no backpointers is a
    /// rule with an empty rhs (an epsilon rule, rendered with no children,
    /// never as a leaf); a completed item whose sole backpointer is a
    /// scanned terminal is rendered as a preterminal leaf; anything else
    /// recurses into each backpointer in order.
    pub fn build(chart: &Chart, item: &Item) -> Tree {
        let rule = chart.grammar().rule(item.rule);
        let label = chart.grammar().name_of(rule.lhs()).to_string();

        if rule.rhs().len() == 1 && item.backpointers.len() == 1 {
            if let BackPointer::Terminal(column) = item.backpointers[0] {
                return Tree::Leaf {
                    label,
                    token: chart.token(column as usize).to_string(),
                };
            }
        }

        let children = item
            .backpointers
            .iter()
            .enumerate()
            .map(|(slot, bp)| match bp {
                BackPointer::Item(id) => Tree::build(chart, chart.item(*id)),
                BackPointer::Terminal(column) => {
                    let sym = rule.rhs()[slot];
                    Tree::Leaf {
                        label: chart.grammar().name_of(sym).to_string(),
                        token: chart.token(*column as usize).to_string(),
                    }
                }
            })
            .collect();
        Tree::Node { label, children }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf { label, token } => write!(f, "({label} {token})"),
            Tree::Node { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
