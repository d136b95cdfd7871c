// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod search;
pub mod types;

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default};
use crate::dag::PrecedenceGraph;
use crate::input::{ParsedInput, read_input};
use crate::search::{Reporter, Search, SearchOutcome, SearchSettings, TracingReporter};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - input parsing and graph validation
/// - the search, on a blocking thread
/// - Ctrl-C handling (stops the search between candidates)
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;
    let settings = settings_from_args(&cfg, &args);
    settings.validate()?;

    let input = read_input(args.input.as_deref())?;
    info!(
        tasks = input.task_count(),
        edges = input.edges.len(),
        "parsed input"
    );

    let graph = build_graph(&input)?;

    if args.dry_run {
        print_dry_run(&input, &graph);
        return Ok(());
    }

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            warn!("interrupt received; stopping search");
            stop.store(true, Ordering::Relaxed);
        });
    }

    let search = Search::new(settings).with_stop_flag(stop);
    let durations = input.durations();
    let failure_rates = input.failure_rates();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut reporter = TracingReporter;
        search.run(&graph, &durations, &failure_rates, &mut reporter)
    })
    .await??;

    print!("{}", render_outcome(&input, &outcome));
    Ok(())
}

/// Build the precedence graph for `input` and return its transitive
/// reduction, which has the same linear extensions.
pub fn build_graph(input: &ParsedInput) -> crate::errors::Result<PrecedenceGraph> {
    let graph = PrecedenceGraph::build(input.task_count(), &input.edges)?;
    let reduced = graph.reduced();
    info!(
        edges = graph.edge_count(),
        reduced_edges = reduced.edge_count(),
        "built precedence graph"
    );
    Ok(reduced)
}

/// Parse-free core: validate the graph and search it.
pub fn optimize(
    input: &ParsedInput,
    settings: SearchSettings,
    reporter: &mut dyn Reporter,
) -> crate::errors::Result<SearchOutcome> {
    let graph = build_graph(input)?;
    Search::new(settings).run(
        &graph,
        &input.durations(),
        &input.failure_rates(),
        reporter,
    )
}

/// CLI flags win over the config file.
///
/// Without `--exhaustive-limit`, the limit follows an overridden
/// `seeds * budget` unless the file set `exhaustive_limit` itself.
pub fn settings_from_args(cfg: &ConfigFile, args: &CliArgs) -> SearchSettings {
    let mut settings = SearchSettings::from_config(cfg);
    if let Some(strategy) = args.strategy {
        settings.strategy = strategy;
    }
    if let Some(seeds) = args.seeds {
        settings.seeds = seeds;
    }
    if let Some(budget) = args.budget {
        settings.budget = budget;
    }
    match args.exhaustive_limit {
        Some(limit) => settings.exhaustive_limit = limit,
        None if cfg.search.exhaustive_limit.is_none() => {
            settings.exhaustive_limit = settings.seeds.saturating_mul(settings.budget);
        }
        None => {}
    }
    if args.rng_seed.is_some() {
        settings.rng_seed = args.rng_seed;
    }
    debug!(?settings, "effective search settings");
    settings
}

/// Final report: score, then task names in schedule order, one per line.
pub fn render_outcome(input: &ParsedInput, outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    if outcome.interrupted {
        let _ = writeln!(out, "search interrupted; best schedule found so far:");
    }
    let _ = writeln!(out, "expected hours saved: {:.4}", outcome.score);
    for name in input.names_in_order(&outcome.schedule) {
        let _ = writeln!(out, "{name}");
    }
    out
}

/// Simple dry-run output: tasks and the reduced precedence edges.
fn print_dry_run(input: &ParsedInput, graph: &PrecedenceGraph) {
    println!("riskorder dry-run");
    println!();

    println!("tasks ({}):", input.task_count());
    for task in &input.tasks {
        println!(
            "  {}. {} ({} h, failure rate {:.2})",
            task.index, task.name, task.duration_hours, task.failure_rate
        );
    }

    let edges = graph.edges();
    println!("reduced edges ({}):", edges.len());
    for (from, to) in edges {
        println!("  {from} -> {to}");
    }

    debug!("dry-run complete (no search)");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::{RawConfigFile, SearchSection};

    fn config_with_limit(limit: Option<usize>) -> ConfigFile {
        ConfigFile::try_from(RawConfigFile {
            search: SearchSection {
                exhaustive_limit: limit,
                ..SearchSection::default()
            },
        })
        .unwrap()
    }

    #[test]
    fn seeds_override_keeps_limit_from_file() {
        let cfg = config_with_limit(Some(500));
        let args = CliArgs::parse_from(["riskorder", "--seeds", "2"]);
        let settings = settings_from_args(&cfg, &args);
        assert_eq!(settings.seeds, 2);
        assert_eq!(settings.exhaustive_limit, 500);
    }

    #[test]
    fn unset_limit_follows_overridden_sample_size() {
        let cfg = config_with_limit(None);
        let args = CliArgs::parse_from(["riskorder", "--seeds", "2", "--budget", "30"]);
        assert_eq!(settings_from_args(&cfg, &args).exhaustive_limit, 60);
    }

    #[test]
    fn explicit_limit_flag_wins() {
        let cfg = config_with_limit(Some(500));
        let args = CliArgs::parse_from(["riskorder", "--budget", "3", "--exhaustive-limit", "7"]);
        assert_eq!(settings_from_args(&cfg, &args).exhaustive_limit, 7);
    }

    #[test]
    fn no_flags_means_file_values() {
        let cfg = config_with_limit(Some(500));
        let args = CliArgs::parse_from(["riskorder"]);
        assert_eq!(settings_from_args(&cfg, &args), SearchSettings::from_config(&cfg));
    }
}
