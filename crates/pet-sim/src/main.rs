//! Headless Pet Simulation
//!
//! Drives a single seeded pet through a tick loop without any UI, optionally
//! with an automatic caretaker, and reports how it fared.
//!
//! Examples:
//!   cargo run -p pet-sim -- --ticks 2000 --care none
//!   cargo run -p pet-sim -- --personality lazy --json
//!   RUST_LOG=debug cargo run -p pet-sim -- --config pet.toml

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pet_core::{Action, Personality, Pet, PetConfig, PetSnapshot};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "pet-sim")]
#[command(about = "Headless driver for the virtual pet simulation")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Fix the personality instead of drawing one at random
    #[arg(long)]
    personality: Option<Personality>,

    /// Tuning file (defaults to pet.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How the pet is looked after between ticks
    #[arg(long, value_enum, default_value_t = CareMode::Attentive)]
    care: CareMode,

    /// Interval between progress reports (in ticks)
    #[arg(long, default_value_t = 50)]
    report_interval: u64,

    /// Print the final run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

/// Caretaker policy applied before every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum CareMode {
    /// Never interact; the pet is left alone
    #[value(name = "none")]
    #[serde(rename = "none")]
    Neglect,
    /// Relieve every need that is flagged for attention
    Attentive,
}

/// Outcome of one simulation run
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    care: CareMode,
    ticks_requested: u64,
    /// Tick on which the pet died, if it did
    died_at_tick: Option<u64>,
    interactions: BTreeMap<String, u64>,
    final_state: PetSnapshot,
}

/// Runs the loop to completion or death.
fn run(pet: &mut Pet, args: &Args) -> RunSummary {
    match args.personality {
        Some(personality) => pet.start_with(personality),
        None => pet.start(),
    }

    let mut interactions: BTreeMap<String, u64> = Action::ALL
        .iter()
        .map(|action| (action.to_string(), 0))
        .collect();
    let mut died_at_tick = None;

    for tick in 1..=args.ticks {
        if args.care == CareMode::Attentive {
            for kind in pet.attention_list() {
                let action = kind.relieved_by();
                pet.interact(action);
                *interactions.entry(action.to_string()).or_default() += 1;
            }
        }

        pet.tick();

        if !pet.is_alive() {
            tracing::warn!("Pet died on tick {}: {}", tick, pet.health());
            died_at_tick = Some(tick);
            break;
        }

        if args.report_interval > 0 && tick % args.report_interval == 0 {
            tracing::info!(
                "[Tick {:>5}] {} mood={} {}",
                tick,
                pet.health(),
                pet.mood(),
                describe_attention(pet)
            );
        }
    }

    RunSummary {
        seed: args.seed,
        care: args.care,
        ticks_requested: args.ticks,
        died_at_tick,
        interactions,
        final_state: pet.snapshot(),
    }
}

fn describe_attention(pet: &Pet) -> String {
    let low = pet.attention_list();
    if low.is_empty() {
        "needs=ok".to_string()
    } else {
        let names: Vec<String> = low
            .iter()
            .map(|kind| format!("{:?}", kind).to_lowercase())
            .collect();
        format!("needs={}", names.join(","))
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PetConfig> {
    match path {
        Some(path) => PetConfig::from_file(path)
            .with_context(|| format!("loading tuning file {}", path.display())),
        None => Ok(PetConfig::load_or_default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    tracing::info!(
        "Pet simulation: seed={} ticks={} care={:?}",
        args.seed,
        args.ticks,
        args.care
    );

    let mut pet = Pet::with_config(config, SmallRng::seed_from_u64(args.seed));
    let summary = run(&mut pet, &args);

    match summary.died_at_tick {
        Some(tick) => tracing::info!("Simulation ended: pet died on tick {}", tick),
        None => tracing::info!(
            "Simulation complete: pet survived {} ticks ({})",
            summary.final_state.age,
            summary.final_state.health
        ),
    }

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing run summary")?;
        println!("{}", json);
    }

    Ok(())
}
