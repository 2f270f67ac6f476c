//! `adaboost` command-line tool.

use adaboost_rust::cli::{run, CliOptions, USAGE};
use anyhow::Context;
use env_logger::Env;

fn main() -> anyhow::Result<()> {
    let options = CliOptions::parse(std::env::args().skip(1)).context("Failed to parse arguments")?;

    if options.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let default_level = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let outcome = run(&options)?;

    if let Some(summary) = &outcome.summary {
        log::info!(
            "Trained {} rounds ({}); training Hamming loss is at most {:.6}",
            summary.rounds,
            summary.termination,
            summary.hamming_loss_bound
        );
    }

    Ok(())
}
