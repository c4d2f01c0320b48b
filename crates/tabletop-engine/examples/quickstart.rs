//! Tabletop quickstart: drive a robot around a grid from the terminal.
//!
//! Demonstrates:
//!   1. Building a GridConfig with a wall behaviour chosen on the command line
//!   2. Subscribing a StatusBoard to the status stream
//!   3. Moving and placing the robot, then drawing the grid
//!
//! Run with:
//!   cargo run --example quickstart -- wrap
//!
//! Commands on stdin: `up`, `down`, `left`, `right`, `place X Y`, `quit`.
//! Set `RUST_LOG=tabletop_engine=debug` to see engine tracing.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tabletop_core::{Direction, GridPosition};
use tabletop_engine::{GridConfig, GridEngine, StatusBoard};
use tabletop_policy::WallBehavior;
use tracing_subscriber::EnvFilter;

// ─── Grid parameters ────────────────────────────────────────────

const WIDTH: i64 = 5;
const HEIGHT: i64 = 5;

// ─── Rendering ──────────────────────────────────────────────────

fn draw(engine: &GridEngine, out: &mut impl Write) -> io::Result<()> {
    let robot = engine.current_position();
    for y in 0..i64::from(engine.height()) {
        let row: String = (0..i64::from(engine.width()))
            .map(|x| {
                if robot == Some(GridPosition::new(x, y)) {
                    " R "
                } else {
                    " . "
                }
            })
            .collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let wall: WallBehavior = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => WallBehavior::Block,
    };

    let mut engine = GridEngine::new(
        GridConfig::default()
            .with_dimensions(WIDTH, HEIGHT)
            .with_wall_behavior(wall),
    )?;

    let board = Arc::new(Mutex::new(StatusBoard::new(engine.notice_timeouts())));
    let sink = Arc::clone(&board);
    let _status = engine.subscribe_to_status(move |event| {
        if let Ok(mut board) = sink.lock() {
            board.observe(event.clone(), Instant::now());
        }
    });

    println!(
        "{}x{} grid, {} walls. Place the robot with `place X Y`.",
        engine.width(),
        engine.height(),
        engine.policy_name()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["place", x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => {
                    engine.set_position_f64(x, y);
                }
                _ => {
                    engine.set_position_f64(f64::NAN, f64::NAN);
                }
            },
            [word] => match word.parse::<Direction>() {
                Ok(direction) => {
                    engine.move_robot(direction);
                }
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    continue;
                }
            },
            _ => {
                writeln!(stdout, "commands: up, down, left, right, place X Y, quit")?;
                continue;
            }
        }

        draw(&engine, &mut stdout)?;
        let shown = board
            .lock()
            .ok()
            .and_then(|b| b.display(Instant::now()).map(|e| e.message()));
        if let Some(message) = shown {
            writeln!(stdout, "> {message}")?;
        }
        stdout.flush()?;
    }

    let m = engine.metrics();
    println!(
        "moves: {} accepted, {} rejected; placements: {} accepted, {} invalid",
        m.moves_accepted, m.moves_rejected, m.placements_accepted, m.invalid_inputs
    );
    Ok(())
}
