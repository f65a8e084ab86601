//! The Earley chart and the engine that drives it.
//!
//! This is a direct, weight-aware translation of `parse.py`'s
//! `EarleyChart._run_earley`/`_predict`/`_scan`/`_attach`, restructured
//! around the teacher library's arena-of-columns shape (`Chart: Vec<Agenda>`,
//! mirroring `binarized.rs`'s `Vec`-of-rules storage) instead of Python
//! object references.

use log::{debug, trace};

use crate::agenda::Agenda;
use crate::grammar::Grammar;
use crate::item::{BackPointer, Item, ItemId};
use crate::symbol::Symbol;

/// One Earley chart for one sentence: a grammar, the tokenized input, and one
/// [`Agenda`] column per inter-token position.
///
/// Built once via [`Chart::parse`], after which [`Chart::accepted`] and
/// [`Chart::goal_item`] answer the recognition/parsing questions spec.md §4.3
/// describes.
pub struct Chart<'g> {
    grammar: &'g Grammar,
    tokens: Vec<String>,
    token_symbols: Vec<Option<Symbol>>,
    columns: Vec<Agenda>,
    goal: Option<ItemId>,
}

impl<'g> Chart<'g> {
    /// Parses `tokens` against `grammar`, running the full Earley engine to
    /// completion before returning.
    pub fn parse(grammar: &'g Grammar, tokens: &[String]) -> Self {
        let n = tokens.len();
        let token_symbols = tokens.iter().map(|t| grammar.symbol(t)).collect();
        let columns = (0..=n).map(|_| Agenda::new()).collect();
        let mut chart = Chart {
            grammar,
            tokens: tokens.to_vec(),
            token_symbols,
            columns,
            goal: None,
        };
        chart.run();
        chart
    }

    /// The grammar this chart was parsed against.
    pub fn grammar(&self) -> &Grammar {
        self.grammar
    }

    /// The input token at position `pos`.
    pub fn token(&self, pos: usize) -> &str {
        &self.tokens[pos]
    }

    /// Resolves an `ItemId` to the `Item` it names.
    pub fn item(&self, id: ItemId) -> &Item {
        self.columns[id.column as usize].get(id.index as usize)
    }

    /// Was the sentence accepted -- does a complete start-symbol item span
    /// the whole input? Answers the recognition question, not the parsing
    /// one (spec.md §4.3's "Goal selection").
    pub fn accepted(&self) -> bool {
        self.goal.is_some()
    }

    /// The goal item (a complete, lowest-weight start-symbol item spanning
    /// `[0, N]`), if the sentence was accepted.
    pub fn goal_item(&self) -> Option<&Item> {
        self.goal.map(|id| self.item(id))
    }

    fn run(&mut self) {
        let n = self.tokens.len();
        self.predict(self.grammar.start_symbol(), 0);

        let mut best_goal: Option<(ItemId, f64)> = None;
        for i in 0..=n {
            debug!("draining column {i}");
            while let Some((idx, item)) = self.columns[i].pop() {
                let item_id = ItemId {
                    column: i as u32,
                    index: idx as u32,
                };
                let rule = self.grammar.rule(item.rule);
                debug_assert!(item.dot_position as usize <= rule.rhs().len());
                debug_assert_eq!(item.backpointers.len(), item.dot_position as usize);

                if item.is_complete(rule.rhs().len()) {
                    trace!("{item_id:?} complete => ATTACH");
                    self.attach(item_id, &item, i);

                    if rule.lhs() == self.grammar.start_symbol()
                        && item.start_position == 0
                        && i == n
                    {
                        let is_better = match &best_goal {
                            None => true,
                            Some((_, best_weight)) => item.weight < *best_weight,
                        };
                        if is_better {
                            best_goal = Some((item_id, item.weight));
                        }
                    }
                } else {
                    let next = rule.rhs()[item.dot_position as usize];
                    if self.grammar.is_nonterminal(next) {
                        trace!("{item_id:?} next={next:?} => PREDICT");
                        self.predict(next, i);
                    } else {
                        trace!("{item_id:?} next={next:?} => SCAN");
                        self.scan(&item, i);
                    }
                }
            }
        }
        self.goal = best_goal.map(|(id, _)| id);
    }

    fn predict(&mut self, nonterminal: Symbol, position: usize) {
        for &rule_id in self.grammar.expansion_ids(nonterminal) {
            let rule = self.grammar.rule(rule_id);
            let item = Item {
                rule: rule_id,
                dot_position: 0,
                start_position: position as u32,
                weight: rule.weight(),
                backpointers: Default::default(),
            };
            self.columns[position].push(item);
        }
    }

    fn scan(&mut self, item: &Item, position: usize) {
        let rule = self.grammar.rule(item.rule);
        let next = rule.rhs()[item.dot_position as usize];
        if position < self.tokens.len() && self.token_symbols[position] == Some(next) {
            let mut backpointers = item.backpointers.clone();
            backpointers.push(BackPointer::Terminal(position as u32));
            let new_item = Item {
                rule: item.rule,
                dot_position: item.dot_position + 1,
                start_position: item.start_position,
                weight: item.weight,
                backpointers,
            };
            self.columns[position + 1].push(new_item);
        }
    }

    /// Attaches a just-completed item to every customer waiting for its lhs
    /// in the column where it started. The mid column is rescanned by index
    /// up to its *current* length on every iteration, rather than snapshotted
    /// up front, so that when `mid == position` (a zero-width completion --
    /// an epsilon derivation, or any nullable nonterminal) a customer item
    /// pushed earlier in this very call is itself visited and can be attached
    /// to again. This mirrors `parse.py`'s live-list `for` loop, where CPython
    /// picks up items appended to the list during the same iteration; without
    /// it, chaining two adjacent nullable symbols in one rhs (e.g. `Z -> Y Y`
    /// with `Y -> epsilon`) never reaches dot-complete.
    fn attach(&mut self, completed_id: ItemId, completed_item: &Item, position: usize) {
        let mid = completed_item.start_position as usize;
        let completed_lhs = self.grammar.rule(completed_item.rule).lhs();

        let mut idx = 0;
        while idx < self.columns[mid].all().len() {
            let customer = self.columns[mid].all()[idx].clone();
            idx += 1;

            let customer_rule = self.grammar.rule(customer.rule);
            if customer.dot_position as usize >= customer_rule.rhs().len() {
                continue;
            }
            if customer_rule.rhs()[customer.dot_position as usize] != completed_lhs {
                continue;
            }
            let mut backpointers = customer.backpointers.clone();
            backpointers.push(BackPointer::Item(completed_id));
            let new_item = Item {
                rule: customer.rule,
                dot_position: customer.dot_position + 1,
                start_position: customer.start_position,
                weight: customer.weight + completed_item.weight,
                backpointers,
            };
            self.columns[position].push(new_item);
        }
    }
}
