//! DFA Sentinel entry point
//!
//! Headless driver: runs the simulation at a fixed 60 Hz tick with the
//! autopilot at the keys, printing the HUD as it goes and a JSON summary at
//! the end.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dfa_sentinel::consts::TICK_RATE;
use dfa_sentinel::sim::{Autopilot, DfaState, GameEvent, Session, tick};
use dfa_sentinel::{Hud, Tuning};

#[derive(Debug, Parser)]
#[command(name = "dfa-sentinel", about = "Run a headless DFA Sentinel session")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pace the loop at the real tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print the HUD every N ticks (0 = only on events)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// How many times to press restart after being caught
    #[arg(long, default_value_t = 0)]
    restarts: u32,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    captures: u32,
    treasures: u32,
    best_score: u32,
    final_score: u32,
    final_state: DfaState,
    game_over: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before unix epoch")?
            .as_nanos() as u64,
    };

    log::info!("DFA Sentinel starting (seed {seed})");

    let mut session = Session::with_tuning(tuning, seed)?;
    let mut pilot = Autopilot::new(args.restarts);
    let frame = Duration::from_secs(1) / TICK_RATE;

    let mut summary = RunSummary {
        seed,
        ticks: 0,
        captures: 0,
        treasures: 0,
        best_score: 0,
        final_score: 0,
        final_state: session.state,
        game_over: false,
    };

    while summary.ticks < args.ticks && !pilot.finished(&session) {
        let started = Instant::now();

        let input = pilot.input(&session);
        let events = tick(&mut session, &input);
        summary.ticks += 1;

        for event in &events {
            match event {
                GameEvent::PlayerCaught { .. } => summary.captures += 1,
                GameEvent::TreasureCollected { score } => {
                    summary.treasures += 1;
                    summary.best_score = summary.best_score.max(*score);
                }
                GameEvent::StateChanged { .. } | GameEvent::Restarted => {}
            }
        }

        let periodic = args.report_every > 0 && summary.ticks % args.report_every == 0;
        if periodic || !events.is_empty() {
            println!("[{:>6}] {}", summary.ticks, Hud::from_session(&session));
        }

        if args.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    summary.final_score = session.score;
    summary.final_state = session.state;
    summary.game_over = session.game_over;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
