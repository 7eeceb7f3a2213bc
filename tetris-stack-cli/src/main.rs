//! Tetris Stack
//!
//! Interactive text driver: shows the piece queue and reserve, reads a menu
//! choice per line from stdin and applies it.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::builder::TypedValueParser;
use clap::Parser;
use rand::Rng;

use tetris_stack_core::{
    Command, Outcome, PieceGenerator, Rack, RackConfig, DEFAULT_QUEUE_CAPACITY,
    DEFAULT_RESERVE_CAPACITY,
};

#[derive(Parser, Debug)]
#[command(name = "tetris-stack", version, about = "Manage a Tetris piece queue and reserve")]
struct Args {
    /// Number of upcoming pieces kept in the queue
    #[arg(long, env = "TETRIS_QUEUE_CAPACITY", default_value_t = DEFAULT_QUEUE_CAPACITY,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    queue_capacity: usize,

    /// Number of reserve slots
    #[arg(long, env = "TETRIS_RESERVE_CAPACITY", default_value_t = DEFAULT_RESERVE_CAPACITY,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    reserve_capacity: usize,

    /// Seed for piece generation (defaults to the system clock)
    #[arg(long, env = "TETRIS_SEED")]
    seed: Option<u64>,

    /// Print the state as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = RackConfig {
        queue_capacity: args.queue_capacity,
        reserve_capacity: args.reserve_capacity,
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("starting with {config:?}, seed {seed}");

    let mut rack = Rack::new(config, PieceGenerator::seeded(seed));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut rack, stdin.lock(), stdout.lock(), args.json)
}

/// Menu loop. Returns on `Quit` or end of input.
fn run<R: Rng>(
    rack: &mut Rack<R>,
    mut input: impl BufRead,
    mut out: impl Write,
    json: bool,
) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        writeln!(out, "\n===== TETRIS STACK =====")?;
        print_state(rack, &mut out, json)?;
        print_menu(&mut out)?;
        write!(out, "Choice: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "\nWarning: {e}")?;
                continue;
            }
        };

        match rack.apply(command) {
            Ok(Outcome::Quit) => {
                writeln!(out, "\n{}", Outcome::Quit)?;
                return Ok(());
            }
            Ok(outcome) => writeln!(out, "\n{outcome}")?,
            Err(e) => writeln!(out, "\nWarning: {e}")?,
        }
    }
}

fn print_state<R: Rng>(rack: &Rack<R>, out: &mut impl Write, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&rack.snapshot())?)?;
    } else {
        writeln!(out, "{rack}")?;
    }
    Ok(())
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    for (_, key, label) in Command::MENU {
        writeln!(out, "{key} - {label}")?;
    }
    Ok(())
}
