use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gini_core::presets::DistributionShape;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income inequality simulator.
///
/// Generates a synthetic income population, measures its Gini coefficient,
/// and shows how a progressive tax schedule changes it.
#[derive(Debug, Parser)]
#[command(name = "gini-sim", version, about, long_about = None)]
pub struct Cli {
    /// TOML run file with seed, population and brackets.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the population generator; random when omitted.
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Log filter, e.g. `debug` or `gini_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a population and print its Lorenz table and Gini coefficient.
    Generate {
        #[command(flatten)]
        population: PopulationArgs,
    },

    /// Generate a population, tax it, and compare Gini before and after.
    Tax {
        #[command(flatten)]
        population: PopulationArgs,

        /// CSV bracket table with `width,rate` columns.
        #[arg(short, long)]
        brackets: Option<PathBuf>,
    },

    /// List the built-in scenarios.
    Scenarios,
}

/// Where the population comes from. At most one source may be given; with
/// none, the run file decides.
#[derive(Debug, Clone, Args)]
pub struct PopulationArgs {
    /// Built-in scenario (see `scenarios`).
    #[arg(long, conflicts_with_all = ["bands", "count", "groups"])]
    pub scenario: Option<String>,

    /// CSV of explicit bands with `min_income,max_income,size` columns.
    #[arg(long, conflicts_with_all = ["count", "groups"])]
    pub bands: Option<PathBuf>,

    /// Flat mode: number of individuals.
    #[arg(long, requires_all = ["min_income", "max_income"], conflicts_with = "groups")]
    pub count: Option<i64>,

    /// Flat mode: lowest possible income.
    #[arg(long, requires = "count")]
    pub min_income: Option<i64>,

    /// Flat mode: highest possible income.
    #[arg(long, requires = "count")]
    pub max_income: Option<i64>,

    /// Banded mode: number of income groups.
    #[arg(long, requires = "group_span")]
    pub groups: Option<i64>,

    /// Banded mode: income width of each group.
    #[arg(long, requires = "groups")]
    pub group_span: Option<i64>,

    /// Banded mode: people per group, comma separated.
    #[arg(long, value_delimiter = ',', requires = "groups", conflicts_with = "shape")]
    pub group_sizes: Vec<i64>,

    /// Banded mode: derive group sizes from a shape instead.
    #[arg(long, requires = "groups")]
    pub shape: Option<DistributionShape>,

    /// Banded mode: head count spread by `--shape`.
    #[arg(long, default_value_t = DEFAULT_PEOPLE)]
    pub people: i64,
}

const DEFAULT_PEOPLE: i64 = 200;

impl Default for PopulationArgs {
    fn default() -> Self {
        Self {
            scenario: None,
            bands: None,
            count: None,
            min_income: None,
            max_income: None,
            groups: None,
            group_span: None,
            group_sizes: Vec::new(),
            shape: None,
            people: DEFAULT_PEOPLE,
        }
    }
}
