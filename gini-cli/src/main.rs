use anyhow::Context;
use clap::Parser;
use tracing::debug;

use gini_cli::app;
use gini_cli::cli::{Cli, Command};
use gini_cli::config::RunConfig;
use gini_cli::logging::init_logging;
use gini_cli::render::{LorenzTable, ScenarioList, TaxSummary};
use gini_core::presets::Scenario;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading run file");
            RunConfig::load(path)
                .with_context(|| format!("failed to load run file {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    match &cli.command {
        Command::Generate { population } => {
            let outcome = app::run_generate(population, cli.seed, &config)?;
            print_header(outcome.seed, outcome.scenario);
            print!(
                "{}",
                LorenzTable {
                    incomes: outcome.population.incomes(),
                    curve: &outcome.curve,
                    gini: outcome.gini,
                }
            );
        }
        Command::Tax {
            population,
            brackets,
        } => {
            let outcome = app::run_tax(population, brackets.as_deref(), cli.seed, &config)?;
            print_header(outcome.seed, outcome.scenario);
            print!(
                "{}",
                TaxSummary {
                    report: &outcome.report,
                }
            );
        }
        Command::Scenarios => {
            print!(
                "{}",
                ScenarioList {
                    scenarios: Scenario::all(),
                }
            );
        }
    }

    Ok(())
}

fn print_header(
    seed: u64,
    scenario: Option<&Scenario>,
) {
    match scenario {
        Some(scenario) => println!(
            "{} (seed {seed}, reference Gini {:.2})",
            scenario.name, scenario.expected_gini
        ),
        None => println!("seed {seed}"),
    }
    println!();
}
