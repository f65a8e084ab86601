//! Command-line argument surface (spec.md §6's "CLI surface").
//!
//! Grounded on the `clap`-derive style used across the example pack (e.g.
//! `Brahmastra-Labs-logicaffeine::cli::Cli`), translating
//! `parse.py::parse_args`'s `argparse` setup one option at a time.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Find the minimum-weight Earley derivation of each sentence under a
/// weighted context-free grammar.
#[derive(Parser, Debug)]
#[command(name = "pcfg-earley", version, about)]
pub struct Cli {
    /// Path to a file containing a PCFG (see the grammar file format).
    pub grammar: PathBuf,

    /// Path to a file containing tokenized input sentences, one per line.
    pub sentences: PathBuf,

    /// Start symbol of the grammar.
    #[arg(short = 's', long = "start-symbol", default_value = "ROOT")]
    pub start_symbol: String,

    /// Print a one-line-per-sentence progress counter to stderr.
    #[arg(long)]
    pub progress: bool,

    /// Raise logging verbosity to debug.
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Lower logging verbosity to warnings only.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Resolves `-v`/`-q` into a `log` level filter, defaulting to `Info`
    /// when neither is given -- matching `parse_args`'s
    /// `set_defaults(logging_level=logging.INFO)`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
