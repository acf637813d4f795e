mod draw;
mod inspect;

use clap::{Parser, Subcommand};

use anyhow::Result;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw lottery numbers.
    Draw {
        /// Number of balls drawn, e.g. `6`.
        balls: u64,
        /// Highest number on a ball, e.g. `59`.
        max_number: u64,
        /// Use a seeded generator instead of system entropy, for reproducible draws.
        #[arg(long, conflicts_with = "bytes")]
        seed: Option<u64>,
        /// Use these hex-encoded bytes as the random input, e.g. `7f00a3c1`.
        #[arg(long)]
        bytes: Option<String>,
        /// Print progress records as JSON lines.
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Only print the drawn numbers.
        #[arg(long, short, default_value_t = false)]
        quiet: bool,
    },
    /// Show the number of possible tickets and the randomness a draw needs.
    Odds { balls: u64, max_number: u64 },
    /// Print the combination index of a ticket.
    Rank {
        max_number: u64,
        /// Ticket numbers, in any order.
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Print the ticket for a combination index.
    Unrank {
        balls: u64,
        max_number: u64,
        /// Decimal index in `0..C(max_number, balls)`.
        index: String,
    },
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw {
            balls,
            max_number,
            seed,
            bytes,
            json,
            quiet,
        } => {
            let output = if json {
                draw::Output::Json
            } else if quiet {
                draw::Output::Quiet
            } else {
                draw::Output::Text
            };
            draw::run_draw(balls, max_number, seed, bytes.as_deref(), output)?;
        }
        Commands::Odds { balls, max_number } => {
            inspect::run_odds(balls, max_number)?;
        }
        Commands::Rank {
            max_number,
            numbers,
        } => {
            inspect::run_rank(max_number, numbers)?;
        }
        Commands::Unrank {
            balls,
            max_number,
            index,
        } => {
            inspect::run_unrank(balls, max_number, &index)?;
        }
    }

    Ok(())
}
