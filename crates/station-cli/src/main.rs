use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use contracts::ScenarioConfig;
use station_core::{PrototypeManager, StationWorld};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Spawn preset ID cards from a scenario and show how they end up configured.
#[derive(Parser, Debug)]
#[command(name = "station-cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter, e.g. `info` or `station_core=debug`.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spawn the scenario, assign jobs, and print every card as JSON.
    Run {
        /// Scenario file; the built-in scenario when unset.
        #[arg(long, env = "PRESET_CARDS_SCENARIO")]
        scenario: Option<PathBuf>,
        /// Print the world's audit log instead of the card snapshot.
        #[arg(long)]
        events: bool,
    },
    /// Report unresolved references in a scenario.
    Validate {
        #[arg(long, env = "PRESET_CARDS_SCENARIO")]
        scenario: Option<PathBuf>,
    },
    /// Print the built-in scenario as JSON.
    DefaultScenario,
}

fn load_scenario(path: Option<PathBuf>) -> Result<ScenarioConfig, String> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading scenario");
            ScenarioConfig::load(&path).map_err(|err| err.to_string())
        }
        None => Ok(ScenarioConfig::default()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("failed to encode output: {err}"))
}

fn run(scenario: Option<PathBuf>, events: bool) -> Result<(), String> {
    let config = load_scenario(scenario)?;
    let mut world = StationWorld::from_scenario(&config).map_err(|err| err.to_string())?;
    world
        .apply_job_assignment(&config)
        .map_err(|err| err.to_string())?;

    let output = if events {
        to_json(&world.events())?
    } else {
        to_json(&world.snapshot())?
    };
    println!("{output}");
    Ok(())
}

fn validate(scenario: Option<PathBuf>) -> Result<(), String> {
    let config = load_scenario(scenario)?;
    let mut issues = config.station_issues();
    let prototypes =
        PrototypeManager::from_catalog(config.prototypes.clone()).map_err(|err| err.to_string())?;
    issues.extend(prototypes.validate());
    for (index, card) in config.cards.iter().enumerate() {
        if let Some(job) = card.preset.job_name.as_deref() {
            if prototypes.try_index_job(job).is_none() {
                issues.push(format!("card {index} references unknown job: {job}"));
            }
        }
    }

    if issues.is_empty() {
        println!("scenario {} ok", config.scenario_id);
        return Ok(());
    }
    for issue in &issues {
        println!("{issue}");
    }
    Err(format!("{} issue(s) found", issues.len()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match args.command {
        Command::Run { scenario, events } => run(scenario, events),
        Command::Validate { scenario } => validate(scenario),
        Command::DefaultScenario => to_json(&ScenarioConfig::default()).map(|json| println!("{json}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
