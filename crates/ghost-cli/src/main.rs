mod logging;
mod render;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use ghost_core::game::session::{GameSession, Mode, Status};
use ghost_core::model::cell::Cell;
use ghost_core::model::grid::GridWorld;

/// Terminal front-end for the Bust the Ghost deduction game.
#[derive(Debug, Parser)]
#[command(
    name = "bustghost",
    author,
    version,
    about = "Bust the Ghost: Bayesian grid deduction"
)]
struct Cli {
    /// RNG seed for ghost placement (random when omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start with the probability overlay enabled.
    #[arg(long)]
    peep: bool,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Probe(Cell),
    Bust,
    Peep,
    Show,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    if cli.peep {
        session.toggle_peep();
    }
    tracing::info!(seed = session.seed(), "session started");

    run(&mut session)
}

fn run(session: &mut GameSession) -> Result<()> {
    println!("Bust the Ghost — probe the grid, then bust where it hides.");
    println!("commands: probe COL ROW | bust | peep | show | quit");
    println!("readings: N near, C close, F far, D distant");
    println!("{}", render::frame(session));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse_command(input) {
            Ok(command) => command,
            Err(reason) => {
                println!("{reason}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => {}
            Command::Peep => session.toggle_peep(),
            Command::Bust => arm_bust(session),
            Command::Probe(cell) => handle_click(session, cell)?,
        }

        println!("{}", render::frame(session));

        if session.status() != Status::Active {
            tracing::info!(
                status = ?session.status(),
                score = session.score(),
                attempts = session.bust_attempts(),
                "session finished"
            );
            println!("The ghost was at {}.", session.target());
            break;
        }
    }

    Ok(())
}

fn arm_bust(session: &mut GameSession) {
    if session.mode() == Mode::AwaitingBust {
        println!("bust already armed");
        return;
    }
    session.request_bust_mode();
    if session.mode() == Mode::AwaitingBust {
        println!("bust armed: the next probe is your guess");
    } else {
        println!("no bust attempts left");
    }
}

fn handle_click(session: &mut GameSession, cell: Cell) -> Result<()> {
    let was_armed = session.mode() == Mode::AwaitingBust;
    let collapses = session.belief().collapse_count();

    session
        .click(cell)
        .with_context(|| format!("engine rejected click at {cell}"))?;

    if session.belief().collapse_count() > collapses {
        tracing::warn!(%cell, "reading had zero marginal probability; belief reset to uniform");
    }

    if was_armed {
        if session.status() == Status::Active {
            println!(
                "bust missed at {cell} — {} attempt(s) left",
                session.bust_attempts()
            );
        }
    } else if let Some(reading) = session.observation(cell) {
        tracing::debug!(%cell, %reading, score = session.score(), "probe");
        println!("sensor reads {reading} at {cell}");
    }

    Ok(())
}

fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let verb = parts.next().unwrap_or_default();

    let command = match verb {
        "probe" | "p" => {
            let col = parse_coordinate(parts.next(), "COL")?;
            let row = parse_coordinate(parts.next(), "ROW")?;
            let cell = Cell::new(col, row);
            if !GridWorld::contains(cell) {
                return Err(format!(
                    "cell {cell} is off the board (columns 0-{}, rows 0-{})",
                    GridWorld::WIDTH - 1,
                    GridWorld::HEIGHT - 1
                ));
            }
            Command::Probe(cell)
        }
        "bust" | "b" => Command::Bust,
        "peep" => Command::Peep,
        "show" => Command::Show,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unrecognized command: {other}")),
    };

    if parts.next().is_some() {
        return Err(format!("too many arguments for '{verb}'"));
    }
    Ok(command)
}

fn parse_coordinate(part: Option<&str>, name: &str) -> Result<u8, String> {
    let raw = part.ok_or_else(|| format!("missing {name} (usage: probe COL ROW)"))?;
    raw.parse::<u8>()
        .map_err(|_| format!("{name} must be a small non-negative integer, got '{raw}'"))
}
