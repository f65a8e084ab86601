//! `pcfg-earley` CLI entry point.
//!
//! Wires argument parsing, logging, grammar/sentence loading, and per-sentence
//! parsing into the batch driver spec.md §6 describes, following
//! `parse.py::main`'s shape: load the grammar once, then loop over sentences,
//! printing `NONE` or a rendered tree plus weight for each.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use pcfg_earley::chart::Chart;
use pcfg_earley::cli::Cli;
use pcfg_earley::loader::{load_grammar, load_sentences};
use pcfg_earley::tree::Tree;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    let grammar = match load_grammar(&cli.grammar, &cli.start_symbol) {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let sentences = match load_sentences(&cli.sentences) {
        Ok(sentences) => sentences,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let total = sentences.len();
    for (i, tokens) in sentences.into_iter().enumerate() {
        if cli.progress {
            eprintln!("parsing sentence {}/{}", i + 1, total);
        }
        debug!("{}", "=".repeat(70));
        debug!("parsing sentence: {}", tokens.join(" "));

        let chart = Chart::parse(&grammar, &tokens);
        match chart.goal_item() {
            None => {
                info!("sentence {} not accepted", i + 1);
                println!("NONE");
            }
            Some(goal) => {
                let tree = Tree::build(&chart, goal);
                info!("sentence {} accepted, weight {}", i + 1, goal.weight);
                println!("{tree}");
                println!("{}", goal.weight);
            }
        }
    }

    ExitCode::SUCCESS
}
