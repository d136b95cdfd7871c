// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::Strategy;

/// Command-line arguments for `riskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "riskorder",
    version,
    about = "Order dependent tasks so that early failures save the most remaining work.",
    long_about = None
)]
pub struct CliArgs {
    /// Task/edge list to read. Reads stdin when omitted.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Optional TOML file with a `[search]` section.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search strategy (auto, exhaustive, sampled).
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Number of relabelings used by the sampler, including the identity.
    #[arg(long, value_name = "N")]
    pub seeds: Option<usize>,

    /// Linear extensions drawn per relabeling.
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,

    /// Seed for the relabeling RNG. Runs with the same seed are reproducible.
    #[arg(long, value_name = "N")]
    pub rng_seed: Option<u64>,

    /// With `--strategy auto`, enumerate exhaustively when the graph has at
    /// most this many linear extensions.
    #[arg(long, value_name = "N")]
    pub exhaustive_limit: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RISKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the reduced graph, but don't search.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
