use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use skywatch_app::autopilot::{self, RunMetrics};
use skywatch_app::game_loop::TICK_DURATION;
use skywatch_app::GameLoop;
use skywatch_core::commands::PlayerCommand;
use skywatch_core::enums::GameStatus;
use skywatch_core::tables::GameTables;
use skywatch_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "skywatch")]
#[command(about = "Headless radar-intercept session driven by the autopilot")]
struct Cli {
    /// RNG seed for spawn bearings and stealth flicker
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many frames even if the game is still running
    #[arg(long, default_value_t = 108_000)]
    max_frames: u64,
    /// JSON file with weapon, contact and level tables
    #[arg(long)]
    tables: Option<PathBuf>,
    /// Run on the wall-clock game loop instead of stepping as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn load_tables(path: Option<&PathBuf>) -> Result<GameTables> {
    let Some(path) = path else {
        return Ok(GameTables::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read tables from {}", path.display()))?;
    GameTables::from_json(&json)
        .with_context(|| format!("invalid tables in {}", path.display()))
}

fn run_realtime(config: SimConfig, max_frames: u64) -> Result<RunMetrics> {
    let seed = config.seed;
    let mut game_loop = GameLoop::spawn(config)?;
    game_loop.send(PlayerCommand::StartGame)?;

    let mut launches = 0;
    loop {
        std::thread::sleep(TICK_DURATION);
        let state = game_loop.state()?;
        if state.status != GameStatus::Playing || game_loop.ticks()? >= max_frames {
            break;
        }
        for command in autopilot::plan(&state) {
            if command == PlayerCommand::Launch {
                launches += 1;
            }
            game_loop.send(command)?;
        }
        for event in game_loop.take_audio_events()? {
            log::debug!("audio: {event:?}");
        }
    }

    game_loop.shutdown()?;
    let state = game_loop.state()?;
    Ok(RunMetrics {
        seed,
        max_frames,
        frame_count: game_loop.ticks()?,
        final_score: state.score,
        final_wave: state.wave,
        base_health: state.base_health,
        launches,
        outcome: state.outcome,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = SimConfig {
        seed: cli.seed,
        tables: load_tables(cli.tables.as_ref())?,
    };

    let metrics = if cli.realtime {
        run_realtime(config, cli.max_frames)?
    } else {
        autopilot::run_session(config, cli.max_frames)
    };

    log::info!(
        "session over after {} frames: {:?}, score {}",
        metrics.frame_count,
        metrics.outcome,
        metrics.final_score
    );
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
