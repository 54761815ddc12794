use clap::Parser;

use dumpling_maker_rs::sim::{print_report, run_simulation, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Balance simulator for the dumpling order game")]
struct Args {
    /// Rounds per (difficulty, policy) cell
    #[arg(long, default_value = "500")]
    rounds: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    if args.rounds == 0 {
        eprintln!("Error: --rounds must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Simulating {} rounds per cell (seed {})...",
        args.rounds, args.seed
    );

    let config = SimConfig {
        rounds: args.rounds,
        seed: args.seed,
    };
    let reports = run_simulation(&config);
    print_report(&reports);
}
