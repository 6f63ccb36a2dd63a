use anyhow::Result;
use clap::Parser;
use log::info;

use road_runner::simulation::{
    Autopilot, FrameInput, GameConfig, RunStats, RunnerWorld, TickOutcome,
};

#[derive(Parser)]
#[command(name = "road_runner")]
#[command(about = "Endless road runner with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Seed for the road generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the road map after every simulated second in headless mode
    #[arg(long)]
    map: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(cli.seed);
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,road_runner=info"),
    )
    .init();

    run_headless(cli.ticks, cli.delta, cli.seed, cli.map)
}

/// Run the game in headless mode with the autopilot at the wheel
fn run_headless(ticks: u32, delta: f32, seed: Option<u64>, map: bool) -> Result<()> {
    anyhow::ensure!(
        delta.is_finite() && delta > 0.0,
        "delta must be a positive number of seconds, got {}",
        delta
    );

    info!("Running road runner in headless mode...");
    info!("Ticks: {}, Delta: {:.4}s, Seed: {:?}", ticks, delta, seed);

    // Calculate how many ticks equal 1 second of simulation time
    let ticks_per_second = (1.0 / delta).ceil() as u32;

    let config = GameConfig::default();
    let mut world = match seed {
        Some(seed) => RunnerWorld::new_with_seed(config, seed, 0.0)?,
        None => RunnerWorld::new(config, 0.0)?,
    };
    let autopilot = Autopilot;
    let mut stats = RunStats::default();

    if map {
        world.print_summary(0.0);
        world.draw_map();
    }

    for tick in 1..=ticks {
        let now = tick as f64 * delta as f64;
        let input = FrameInput {
            now,
            dt: delta,
            steer: autopilot.steer(&world),
            // The autopilot gets straight back on the road after a crash
            restart: world.is_paused(),
        };

        let outcome = world.tick(&input)?;
        stats.record(&outcome, delta, world.current_speed());

        if let TickOutcome::Crashed { score, .. } = outcome {
            info!("Crash on tick {} with score {:.1}s", tick, score);
        }

        if tick % ticks_per_second == 0 {
            info!(
                "--- After tick {} ({:.1}s simulated time) --- {}",
                tick,
                now,
                world.game_state.summary(now)
            );
            if map {
                world.draw_map();
            }
        }
    }

    let end = ticks as f64 * delta as f64;
    stats.best_score = stats.best_score.max(world.score(end));
    if map {
        world.print_summary(end);
    }
    stats.log_summary();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(seed: Option<u64>) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use road_runner::simulation::{SCREEN_HEIGHT, SCREEN_WIDTH};

    println!("Starting Road Runner UI...");
    println!();
    println!("Controls:");
    println!("  A/D or Left/Right - Steer");
    println!("  Space             - Play again after a crash");
    println!("  ESC               - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,road_runner=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Road Runner".into(),
                        resolution: (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(road_runner::ui::RoadRunnerUIPlugin {
            seed,
            ..default()
        })
        .run();
}
