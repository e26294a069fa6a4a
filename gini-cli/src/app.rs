//! Resolves command-line flags and the run file into concrete simulation
//! inputs, then runs the core pipeline.

use std::path::Path;

use anyhow::{Context, Result, bail};
use gini_core::calculations::GiniCalculator;
use gini_core::presets::{DistributionShape, Scenario};
use gini_core::{
    BracketTable, GenerationMode, LorenzCurve, Population, TaxReport, apply_tax_schedule,
    generate_population,
};
use gini_data::{BracketTableLoader, IncomeBandLoader};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::cli::PopulationArgs;
use crate::config::RunConfig;

/// Generation parameters plus the preset they came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPopulation {
    pub mode: GenerationMode,
    pub scenario: Option<&'static Scenario>,
}

impl ResolvedPopulation {
    fn from_scenario(scenario: &'static Scenario) -> Result<Self> {
        Ok(Self {
            mode: scenario
                .generation_mode()
                .with_context(|| format!("scenario '{}' is malformed", scenario.key))?,
            scenario: Some(scenario),
        })
    }

    fn from_mode(mode: GenerationMode) -> Self {
        Self {
            mode,
            scenario: None,
        }
    }
}

/// Output of `gini-sim generate`.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub seed: u64,
    pub scenario: Option<&'static Scenario>,
    pub population: Population,
    pub curve: LorenzCurve,
    pub gini: f64,
}

/// Output of `gini-sim tax`.
#[derive(Debug, Clone)]
pub struct TaxOutcome {
    pub seed: u64,
    pub scenario: Option<&'static Scenario>,
    pub report: TaxReport,
}

fn find_scenario(key: &str) -> Result<&'static Scenario> {
    Scenario::find(key).with_context(|| {
        format!("unknown scenario '{key}'; run `gini-sim scenarios` to list them")
    })
}

/// Picks the population source.
///
/// Flags are checked first (scenario, bands file, flat, banded), then the
/// run file (scenario, population table).
pub fn resolve_population(
    args: &PopulationArgs,
    config: &RunConfig,
) -> Result<ResolvedPopulation> {
    if let Some(key) = &args.scenario {
        return ResolvedPopulation::from_scenario(find_scenario(key)?);
    }

    if let Some(path) = &args.bands {
        let bands = IncomeBandLoader::load_from_file(path)
            .with_context(|| format!("failed to load income bands from {}", path.display()))?;
        return Ok(ResolvedPopulation::from_mode(GenerationMode::Ranges {
            bands,
        }));
    }

    if let Some(count) = args.count {
        let (Some(min_income), Some(max_income)) = (args.min_income, args.max_income) else {
            bail!("--count needs both --min-income and --max-income");
        };
        return Ok(ResolvedPopulation::from_mode(GenerationMode::Flat {
            count,
            min_income,
            max_income,
        }));
    }

    if let Some(groups) = args.groups {
        let group_span = args
            .group_span
            .context("--groups needs --group-span")?;
        let group_sizes = if !args.group_sizes.is_empty() {
            args.group_sizes.clone()
        } else {
            // Without explicit sizes the people are spread by shape.
            let shape = args.shape.unwrap_or(DistributionShape::Equal);
            shape
                .group_sizes(args.people, groups)
                .with_context(|| format!("cannot spread {} people as '{shape}'", args.people))?
        };
        return Ok(ResolvedPopulation::from_mode(GenerationMode::Banded {
            groups,
            group_span,
            group_sizes,
        }));
    }

    if let Some(key) = &config.scenario {
        return ResolvedPopulation::from_scenario(find_scenario(key)?);
    }

    if let Some(mode) = &config.population {
        return Ok(ResolvedPopulation::from_mode(mode.clone()));
    }

    bail!(
        "no population given; pass --scenario, --bands, --count or --groups, \
         or set `scenario` or `[population]` in the run file"
    )
}

/// Picks the bracket table: `--brackets` file, then the run file's table,
/// then the scenario's own schedule.
pub fn resolve_brackets(
    brackets: Option<&Path>,
    config: &RunConfig,
    scenario: Option<&Scenario>,
) -> Result<BracketTable> {
    if let Some(path) = brackets {
        return BracketTableLoader::load_from_file(path)
            .with_context(|| format!("failed to load brackets from {}", path.display()));
    }

    if let Some(table) = &config.brackets {
        return Ok(table.clone());
    }

    if let Some(scenario) = scenario {
        return Ok(scenario.bracket_table());
    }

    bail!(
        "no bracket table given; pass --brackets, use a scenario, \
         or add [[brackets]] to the run file"
    )
}

/// Flag seed, then run-file seed, then a fresh random one.
pub fn resolve_seed(
    flag: Option<u64>,
    config: &RunConfig,
) -> u64 {
    match flag.or(config.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().r#gen();
            info!(seed, "no seed given, drew a random one; pass --seed {seed} to repeat this run");
            seed
        }
    }
}

fn generate(
    population: &ResolvedPopulation,
    seed: u64,
) -> Result<Population> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generated = generate_population(population.mode.clone(), &mut rng)
        .context("invalid population parameters")?;
    debug!(seed, individuals = generated.len(), "population generated");
    Ok(generated)
}

pub fn run_generate(
    args: &PopulationArgs,
    seed: Option<u64>,
    config: &RunConfig,
) -> Result<GenerateOutcome> {
    let resolved = resolve_population(args, config)?;
    let seed = resolve_seed(seed, config);
    let population = generate(&resolved, seed)?;

    let curve =
        GiniCalculator::lorenz_curve(population.incomes()).context("cannot build Lorenz curve")?;
    let gini = GiniCalculator::gini_coefficient(population.incomes())
        .context("cannot compute Gini coefficient")?;
    info!(individuals = population.len(), gini, "generate finished");

    Ok(GenerateOutcome {
        seed,
        scenario: resolved.scenario,
        population,
        curve,
        gini,
    })
}

pub fn run_tax(
    args: &PopulationArgs,
    brackets: Option<&Path>,
    seed: Option<u64>,
    config: &RunConfig,
) -> Result<TaxOutcome> {
    let resolved = resolve_population(args, config)?;
    let table = resolve_brackets(brackets, config, resolved.scenario)?;
    let seed = resolve_seed(seed, config);
    let population = generate(&resolved, seed)?;

    let report =
        apply_tax_schedule(population.incomes(), &table).context("cannot apply tax schedule")?;
    info!(
        gini_before = report.gini_before,
        gini_after = report.gini_after,
        total_tax = report.total_tax,
        "tax finished"
    );

    Ok(TaxOutcome {
        seed,
        scenario: resolved.scenario,
        report,
    })
}
