//! Runs driven by the fixture run files and CSV inputs.

use std::path::{Path, PathBuf};

use clap::Parser;
use gini_cli::app::{run_generate, run_tax};
use gini_cli::cli::{Cli, Command, PopulationArgs};
use gini_cli::config::RunConfig;
use gini_cli::render::{LorenzTable, TaxSummary};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_run_file_drives_tax_run() {
    let config = RunConfig::load(&fixture("run.toml")).unwrap();

    let outcome = run_tax(&PopulationArgs::default(), None, None, &config).unwrap();

    assert_eq!(outcome.seed, 42);
    assert_eq!(outcome.scenario, None);
    assert_eq!(outcome.report.individuals.len(), 380);
    assert!(outcome.report.gini_after < outcome.report.gini_before);
}

#[test]
fn test_bracket_file_overrides_run_file_table() {
    let config = RunConfig::load(&fixture("run.toml")).unwrap();
    let from_file = run_tax(
        &PopulationArgs::default(),
        Some(&fixture("brackets.csv")),
        None,
        &config,
    )
    .unwrap();
    let from_config = run_tax(&PopulationArgs::default(), None, None, &config).unwrap();

    // Both tables hold the same brackets, so the reports agree.
    assert_eq!(from_file.report, from_config.report);
}

#[test]
fn test_scenario_run_file_uses_scenario_brackets() {
    let config = RunConfig::load(&fixture("scenario.toml")).unwrap();

    let outcome = run_tax(&PopulationArgs::default(), None, None, &config).unwrap();

    assert_eq!(outcome.scenario.map(|s| s.key), Some("sweden"));
    assert_eq!(outcome.seed, 7);
    assert!(outcome.report.total_tax > 0);
}

#[test]
fn test_bands_file_generation_renders_table() {
    let cli = Cli::try_parse_from([
        "gini-sim",
        "generate",
        "--bands",
        fixture("bands.csv").to_str().unwrap(),
        "--seed",
        "3",
    ])
    .unwrap();
    let Command::Generate { population } = cli.command else {
        panic!("expected generate");
    };

    let outcome = run_generate(&population, cli.seed, &RunConfig::default()).unwrap();
    let text = LorenzTable {
        incomes: outcome.population.incomes(),
        curve: &outcome.curve,
        gini: outcome.gini,
    }
    .to_string();

    assert_eq!(outcome.population.len(), 140);
    assert!(outcome.gini > 0.0 && outcome.gini < 1.0);
    assert!(text.ends_with(&format!(
        "140 individuals, Gini coefficient {:.3}\n",
        outcome.gini
    )));
}

#[test]
fn test_flag_seed_overrides_run_file_seed() {
    let config = RunConfig::load(&fixture("run.toml")).unwrap();

    let outcome = run_generate(&PopulationArgs::default(), Some(5), &config).unwrap();

    assert_eq!(outcome.seed, 5);
}

#[test]
fn test_tax_summary_of_run_file() {
    let config = RunConfig::load(&fixture("run.toml")).unwrap();
    let outcome = run_tax(&PopulationArgs::default(), None, None, &config).unwrap();

    let text = TaxSummary {
        report: &outcome.report,
    }
    .to_string();

    assert!(text.contains("Gini before tax"));
    assert!(text.contains("Gini after tax"));
    assert!(text.contains(&format!("{}", outcome.report.total_tax)));
}

#[test]
fn test_missing_run_file_is_an_error() {
    assert!(RunConfig::load(&fixture("nope.toml")).is_err());
}
