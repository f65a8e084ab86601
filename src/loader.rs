//! Grammar-file and sentence-file ingestion (spec.md §6).
//!
//! Grounded directly on `parse.py::Grammar.add_rules_from_file` and
//! `parse.py::main`'s sentence-reading loop: this module translates the same
//! two line-oriented UTF-8 text formats into a `Grammar` and a list of
//! tokenized sentences, reproducing the original's exact order of operations
//! (comment-stripping, then trailing-whitespace trim, then blank-line skip,
//! then tab-split) since spec.md leaves that order ambiguous.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarBuilder};

/// Loads a grammar from a `.gr`-style file: one rule per non-blank,
/// non-comment-only line, `probability<TAB>lhs<TAB>rhs`.
///
/// A `#` begins a comment running to end of line; it is stripped before
/// anything else, matching `line.split("#")[0].rstrip()` in the original.
/// The resulting line is skipped if empty, otherwise split on tabs into
/// exactly three fields. Any deviation -- wrong field count, a
/// non-numeric or out-of-`(0, 1]` probability, or an empty (whitespace-only)
/// rhs -- is a `GrammarError::Format` naming the offending line.
pub fn load_grammar(path: &Path, start_symbol: &str) -> Result<Grammar, GrammarError> {
    let text = fs::read_to_string(path).map_err(|source| GrammarError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut builder = GrammarBuilder::new(start_symbol);
    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("").trim_end();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let format_err = |reason: &str| GrammarError::Format {
            path: path.to_path_buf(),
            line: line_no + 1,
            reason: reason.to_string(),
        };
        let [prob_str, lhs, rhs_str] = <[&str; 3]>::try_from(fields).map_err(|_| {
            format_err("expected exactly three tab-separated fields: probability, lhs, rhs")
        })?;

        let probability: f64 = prob_str
            .parse()
            .map_err(|_| format_err(&format!("`{prob_str}` is not a valid probability")))?;

        let rhs: Vec<&str> = rhs_str.split_whitespace().collect();
        if rhs.is_empty() {
            return Err(format_err("rhs must name at least one symbol"));
        }

        builder
            .add_rule(probability, lhs, &rhs)
            .map_err(|_| format_err(&format!("probability {probability} must be in (0, 1]")))?;
    }

    Ok(builder.build())
}

/// Loads tokenized sentences from a `.sen`-style file: one sentence per
/// non-empty line, whitespace-split into tokens. Blank lines are skipped,
/// matching `parse.py::main`'s `if sentence != ""` guard.
pub fn load_sentences(path: &Path) -> Result<Vec<Vec<String>>, GrammarError> {
    let text = fs::read_to_string(path).map_err(|source| GrammarError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect())
}

/// Resolves a grammar/sentences path pair the way the CLI hands them in,
/// kept as a tiny value type so `main.rs` has one thing to pass around.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub grammar: PathBuf,
    pub sentences: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_basic_grammar() {
        let file = write_temp("1.0\tROOT\ta\n# a full-line comment\n0.5\tROOT\tROOT a  # trailing comment\n");
        let grammar = load_grammar(file.path(), "ROOT").unwrap();
        let root = grammar.symbol("ROOT").unwrap();
        assert_eq!(grammar.expansions(root).count(), 2);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let file = write_temp("1.0\tROOT\n");
        let err = load_grammar(file.path(), "ROOT").unwrap_err();
        assert!(matches!(err, GrammarError::Format { .. }));
    }

    #[test]
    fn rejects_out_of_range_probability_with_line_number() {
        let file = write_temp("1.0\tROOT\ta\n1.5\tROOT\tb\n");
        let err = load_grammar(file.path(), "ROOT").unwrap_err();
        match err {
            GrammarError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_only_lines_are_ignored() {
        let file = write_temp("\n   \n# just a comment\n1.0\tROOT\ta\n");
        let grammar = load_grammar(file.path(), "ROOT").unwrap();
        let root = grammar.symbol("ROOT").unwrap();
        assert_eq!(grammar.expansions(root).count(), 1);
    }

    #[test]
    fn loads_sentences_skipping_blank_lines() {
        let file = write_temp("the cat saw the dog\n\n   \na\n");
        let sentences = load_sentences(file.path()).unwrap();
        assert_eq!(
            sentences,
            vec![
                vec!["the", "cat", "saw", "the", "dog"],
                vec!["a"],
            ]
        );
    }
}
