use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dumpling_maker_rs::cli::{Cli, Command};
use dumpling_maker_rs::engine::{generate_order, resolve_ingredients, score};
use dumpling_maker_rs::error::Result;
use dumpling_maker_rs::interface::{
    collect_attempt, display_order, display_round_header, display_session_summary,
    display_verdict, prompt_yes_no, CollectStyle,
};
use dumpling_maker_rs::models::{Attempt, CookMethod, Difficulty};
use dumpling_maker_rs::state::GameSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // One process-scoped generator; seeded once, never re-seeded per round.
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match command {
        Command::Play { time_limit, wizard } => {
            cmd_play(cli.difficulty, time_limit, wizard, &mut rng)
        }
        Command::Order { json } => cmd_order(cli.difficulty, json, &mut rng),
        Command::Score {
            ingredients,
            pleats,
            method,
            time,
            json,
        } => cmd_score(cli.difficulty, &ingredients, pleats, method, time, json, &mut rng),
    }
}

/// Interactive round loop.
fn cmd_play(
    difficulty: Difficulty,
    time_limit: u64,
    wizard: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let limit = (time_limit > 0).then(|| Duration::from_secs(time_limit));
    let style = if wizard {
        CollectStyle::Wizard
    } else {
        CollectStyle::SingleScreen
    };

    let mut session = GameSession::new(difficulty, limit);

    println!("Welcome to the dumpling shop!");
    println!("Match the customer's order as closely as you can.");
    if let Some(limit) = limit {
        println!("You have {}s per round.", limit.as_secs());
    }

    loop {
        let order = session.issue_order(rng)?.clone();
        display_round_header(&session, Instant::now());
        display_order(&order);

        if style == CollectStyle::Wizard {
            // Order-review screen: the clock starts only when the player is ready.
            while !prompt_yes_no("Order reviewed. Start folding?", true)? {
                display_order(&order);
            }
        }

        session.begin_attempt(Instant::now())?;
        let timed_out = collect_attempt(&mut session, style)?;
        if timed_out {
            println!();
            println!("Time's up! Scoring what you had ready.");
        }

        let verdict = session.submit()?;
        display_verdict(&verdict);
        println!(
            "Running total after round {}: {} pts",
            session.round(),
            session.total_score()
        );

        if !prompt_yes_no("Next customer?", true)? {
            break;
        }
    }

    display_session_summary(&session);
    Ok(())
}

/// Generate and print one order.
fn cmd_order(difficulty: Difficulty, json: bool, rng: &mut StdRng) -> Result<()> {
    let order = generate_order(difficulty, rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        display_order(&order);
    }

    Ok(())
}

/// Score a single attempt against a freshly generated order.
fn cmd_score(
    difficulty: Difficulty,
    ingredients: &[String],
    pleats: u32,
    method: CookMethod,
    time: f64,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let order = generate_order(difficulty, rng);
    let attempt = Attempt {
        ingredients: resolve_ingredients(ingredients)?,
        pleats,
        method,
        cook_time: time,
    };
    let verdict = score(&order, &attempt);

    if json {
        let out = serde_json::json!({
            "order": order,
            "attempt": attempt,
            "verdict": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_order(&order);
        display_verdict(&verdict);
    }

    Ok(())
}
