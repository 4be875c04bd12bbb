//! Command line driver for the straight-probability simulation.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use straightsim::{
    Card, DEFAULT_MATCHES, DealError, Deck, Rank, Simulation, SimulationError, SimulationOptions,
    Suit, Target,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Estimate how often a dealt hand matches a classification")]
    Simulate {
        /// Classification to count (straight, flush, pair, two-pair, trips, full-house, quads).
        #[arg(short, long, default_value_t = Target::Straight)]
        target: Target,
        /// Number of matching hands after which the run stops.
        #[arg(short, long, default_value_t = DEFAULT_MATCHES)]
        matches: u32,
        /// Seed for the shuffler; defaults to the system clock.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    #[command(about = "Print a card, a deck, a shuffle and a deal")]
    Demo {
        /// Seed for the shuffler; defaults to the system clock.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn simulate(target: Target, matches: u32, seed: u64) -> Result<(), SimulationError> {
    info!("simulating {target} with seed {seed}");
    let options = SimulationOptions::default()
        .with_target(target)
        .with_matches(matches);
    let report = Simulation::new(options, seed).run()?;
    println!("{report}");
    Ok(())
}

fn demo(seed: u64) -> Result<(), DealError> {
    let card = Card::new(Rank::Ace, Suit::Clubs);
    println!("{} {}", card.suit(), card.rank());

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new();
    println!("{deck}");
    deck.shuffle(&mut rng);
    println!("{deck}");
    println!("{}", deck.deal()?);
    println!("{deck}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Demo { seed }) => {
            demo(seed.unwrap_or_else(clock_seed)).map_err(SimulationError::from)
        }
        Some(Command::Simulate {
            target,
            matches,
            seed,
        }) => simulate(target, matches, seed.unwrap_or_else(clock_seed)),
        None => simulate(Target::Straight, DEFAULT_MATCHES, clock_seed()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
