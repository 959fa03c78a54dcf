//! Game action demo.
//!
//! Builds a tiny scene with a
//! [`DestroySignal`](gameaction::resources::destroysignal::DestroySignal), a
//! `Jump` action carrying the jump height and a `Hit` action carrying damage
//! and the attacker name. One handler follows the naming convention and one
//! does not, so both verdicts of the naming check show up in the log.
//! The scene is then torn down through a bevy observer and the event log is
//! printed.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --raises 2 --log-level debug
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{LevelFilter, error, info};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use gameaction::action::{GameAction, Handler, RaiseType};
use gameaction::events::sceneteardown::{SceneTeardownEvent, scene_teardown_observer};
use gameaction::resources::actionsconfig::ActionsConfig;
use gameaction::resources::destroysignal::DestroySignal;

/// Game action demo
#[derive(Parser)]
#[command(version, about = "Raises a few game actions and shows the event log.")]
struct Cli {
    /// INI configuration file (default: ./gameaction.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level override (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    log_level: Option<LevelFilter>,

    /// How many times each action is raised.
    #[arg(long, value_name = "N")]
    raises: Option<u32>,

    /// Write the event log snapshot as JSON to this path.
    #[arg(long, value_name = "PATH")]
    dump_log: Option<PathBuf>,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ActionsConfig::with_path(path),
        None => ActionsConfig::new(),
    };
    // Missing file keeps defaults; reported once the logger is up.
    let load_result = config.load_from_file();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(raises) = cli.raises {
        config.raises = raises;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();
    if let Err(e) = load_result {
        info!("Using default config: {}", e);
    }

    let mut world = World::new();
    let mut signal = DestroySignal::new();

    let jump: GameAction<(f32,)> = GameAction::with_raise(
        "Jump",
        || info!("Jump sound"),
        RaiseType::Pre,
    )
    .linked_to(&mut signal);

    let hit: GameAction<(u32, String)> = GameAction::with_pre_post(
        "Hit",
        || info!("Hit flash on"),
        || info!("Hit flash off"),
    )
    .linked_to(&mut signal);

    let total_height = Rc::new(Cell::new(0.0_f32));
    let h = total_height.clone();
    let jump_handler: Handler<(f32,)> = Handler::new("JumpHandler", move |height: f32| {
        h.set(h.get() + height);
    });
    let on_hit: Handler<(u32, String)> = Handler::new("OnHit", |damage: u32, attacker: String| {
        info!("{} hits for {}", attacker, damage);
    });

    jump.subscribe(&jump_handler);
    hit.subscribe(&on_hit);

    for i in 0..config.raises {
        jump.raise(1.5);
        hit.raise(10 + i, "goblin".to_string());
    }
    info!("Total jump height: {}", total_height.get());

    world.insert_non_send_resource(signal);
    world.add_observer(scene_teardown_observer);
    world.flush();
    world.trigger(SceneTeardownEvent {
        scene: "demo".to_string(),
    });
    info!(
        "After teardown: Jump has {} subscribers, Hit has {}",
        jump.subscriber_count(),
        hit.subscriber_count()
    );

    show_log(&config, cli.dump_log.as_deref());
}

#[cfg(feature = "diagnostics")]
fn show_log(config: &ActionsConfig, dump_path: Option<&std::path::Path>) {
    use gameaction::diagnostics::eventlog;

    if config.show_event_log {
        eventlog::show_event_log();
    }
    if let Some(path) = dump_path {
        let result = eventlog::event_log_snapshot()
            .to_json()
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        match result {
            Ok(()) => info!("Event log written to {}", path.display()),
            Err(e) => {
                error!("Failed to write event log: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(not(feature = "diagnostics"))]
fn show_log(_config: &ActionsConfig, dump_path: Option<&std::path::Path>) {
    if dump_path.is_some() {
        error!("--dump-log needs the `diagnostics` feature");
        std::process::exit(1);
    }
}
