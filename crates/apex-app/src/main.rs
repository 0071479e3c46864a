//! apex-pursuit: drive the Apex Drift wanted-level model from the command line.
//!
//! Usage:
//!   apex-pursuit replay --script drive.json [--config pursuit.json] [--every 30]
//!   apex-pursuit demo --seed 7 --duration 180 [--config pursuit.json]
//!   apex-pursuit live [--config pursuit.json]

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use apex_app::console::{hud_line, parse_line, HudKey};
use apex_app::demo::{generate_drive, DriveConfig};
use apex_app::game_loop::{replay, spawn_game_loop};
use apex_app::script::Script;
use apex_app::state::GameLoopCommand;
use apex_core::config::PursuitConfig;
use apex_core::state::PursuitSnapshot;
use apex_sim::PursuitSession;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "replay" => cmd_replay(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "live" => cmd_live(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        error!("{err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "apex-pursuit: Apex Drift wanted-level simulator\n\
         \n\
         Commands:\n\
         \n\
         replay    Run a timed command script headlessly, printing JSON snapshots\n\
         \n\
           --script <path>    Script JSON file\n\
           --config <path>    Pursuit config JSON (optional)\n\
           --every <N>        Also print every Nth snapshot without events (default: 0 = never)\n\
         \n\
         demo      Generate a seeded random drive and replay it\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --duration <secs>  Drive length (default: 180)\n\
           --config <path>    Pursuit config JSON (optional)\n\
           --every <N>        As for replay\n\
         \n\
         live      Real-time loop; type commands on stdin\n\
         \n\
           --config <path>    Pursuit config JSON (optional)\n\
         \n\
           offense <speeding|collision|property_damage|hit_pedestrian>\n\
           impact <vehicle|prop|pedestrian|scenery> <speed m/s>\n\
           escape | reset | quit\n\
         \n\
         Logging goes to stderr; set RUST_LOG=debug for per-offense detail.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

fn load_config(args: &[String]) -> Result<PursuitConfig> {
    match flag_value(args, "--config") {
        Some(path) => PursuitConfig::load(&PathBuf::from(path))
            .with_context(|| format!("loading config {path}")),
        None => Ok(PursuitConfig::default()),
    }
}

fn run_script(script: &Script, config: PursuitConfig, every: u64) -> Result<()> {
    let mut session = PursuitSession::new(config).context("creating pursuit session")?;
    let mut stdout = std::io::stdout().lock();
    let mut write_err = None;

    let ticks = replay(&mut session, script, |snap| {
        if write_err.is_some() {
            return;
        }
        let due = every > 0 && snap.time.tick % every == 0;
        if !snap.events.is_empty() || due {
            if let Err(err) = print_snapshot(&mut stdout, snap) {
                write_err = Some(err);
            }
        }
    });

    if let Some(err) = write_err {
        return Err(err).context("writing snapshots");
    }

    let final_state = session.state();
    info!(
        ticks,
        stars = %final_state.wanted_stars,
        intensity = final_state.intensity,
        under_chase = final_state.under_chase,
        "replay finished"
    );
    Ok(())
}

fn print_snapshot(out: &mut impl Write, snap: &PursuitSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snap)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_replay(args: &[String]) -> Result<()> {
    let Some(path) = flag_value(args, "--script") else {
        bail!("replay requires --script <path>");
    };
    let script =
        Script::load(&PathBuf::from(path)).with_context(|| format!("loading script {path}"))?;
    let config = load_config(args)?;
    let every = parse_flag(args, "--every", 0u64)?;

    info!(
        entries = script.entries.len(),
        end_secs = script.end_secs(),
        "replaying script"
    );
    run_script(&script, config, every)
}

fn cmd_demo(args: &[String]) -> Result<()> {
    let defaults = DriveConfig::default();
    let drive = DriveConfig {
        seed: parse_flag(args, "--seed", defaults.seed)?,
        duration_secs: parse_flag(args, "--duration", defaults.duration_secs)?,
    };
    drive.validate().context("invalid --duration")?;
    let config = load_config(args)?;
    let every = parse_flag(args, "--every", 0u64)?;

    let script = generate_drive(drive);
    info!(seed = drive.seed, incidents = script.entries.len(), "generated demo drive");
    run_script(&script, config, every)
}

fn cmd_live(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    config.validate().context("validating config")?;

    let (snap_tx, snap_rx) = mpsc::channel::<PursuitSnapshot>();
    let (cmd_tx, loop_handle) = spawn_game_loop(config, snap_tx).context("spawning game loop")?;

    let hud_handle = std::thread::Builder::new()
        .name("apex-pursuit-hud".into())
        .spawn(move || {
            let mut last: Option<HudKey> = None;
            for snap in snap_rx {
                for event in &snap.events {
                    eprintln!("  {event:?}");
                }
                let key = HudKey::from(&snap);
                if last != Some(key) {
                    println!("{}", hud_line(&snap));
                    last = Some(key);
                }
            }
        })
        .context("spawning HUD thread")?;

    info!("live pursuit running; type `quit` to stop");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match parse_line(&line) {
            Ok(Some(GameLoopCommand::Shutdown)) => break,
            Ok(Some(command)) => {
                if cmd_tx.send(command).is_err() {
                    bail!("game loop stopped unexpectedly");
                }
            }
            Ok(None) => {}
            Err(err) => eprintln!("{err}"),
        }
    }

    // The loop may already be gone; a failed send just means it exited first.
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if loop_handle.join().is_err() {
        bail!("game loop thread panicked");
    }
    if hud_handle.join().is_err() {
        bail!("HUD thread panicked");
    }
    Ok(())
}
