use clap::{Parser, Subcommand};

use crate::models::{CookMethod, Difficulty};

/// DumplingMaker — a dumpling-shop order game: match the customer's order,
/// earn points, beat the clock.
#[derive(Parser, Debug)]
#[command(name = "dumpling_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Difficulty level.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    pub difficulty: Difficulty,

    /// Seed for the order generator. Random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds against the clock.
    Play {
        /// Round time limit in seconds. 0 disables the deadline.
        #[arg(short, long, default_value_t = 60)]
        time_limit: u64,

        /// Collect the attempt step by step instead of on one screen.
        #[arg(long)]
        wizard: bool,
    },

    /// Generate and print a single order.
    Order {
        /// Emit the order as JSON instead of the order card.
        #[arg(long)]
        json: bool,
    },

    /// Score one attempt against a freshly generated order, non-interactively.
    Score {
        /// Comma-separated filling ingredients; names are fuzzy-matched
        /// against the pantry.
        #[arg(short, long, value_delimiter = ',', default_value = "")]
        ingredients: Vec<String>,

        /// Pleat count.
        #[arg(short, long, default_value_t = 8)]
        pleats: u32,

        /// Cooking method.
        #[arg(short, long, value_enum, default_value_t = CookMethod::Steamed)]
        method: CookMethod,

        /// Cook time in minutes.
        #[arg(short, long, default_value_t = 8.0)]
        time: f64,

        /// Emit the order and verdict as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            time_limit: 60,
            wizard: false,
        }
    }
}
