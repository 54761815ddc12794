use std::time::Instant;

use crate::engine::constants::ingredient_emoji;
use crate::models::{Order, Verdict};
use crate::state::GameSession;

fn ingredient_list(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items
        .iter()
        .map(|i| format!("{} {}", ingredient_emoji(i), i))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Print the order card for a round.
pub fn display_order(order: &Order) {
    println!();
    println!("=== Today's Order ===");
    println!();
    println!(
        "  Main protein : {} {}",
        ingredient_emoji(&order.required_protein),
        order.required_protein
    );
    println!("  Must include : {}", ingredient_list(&order.must_have));
    println!("  Keep out     : {}", ingredient_list(&order.avoid));
    println!("  Nice to add  : {}", ingredient_list(&order.optional_mixes));
    println!(
        "  Pleats       : {} to {}",
        order.pleat_range.min, order.pleat_range.max
    );
    println!("  Method       : {}", order.method);
    println!(
        "  Cook time    : {:.1} to {:.1} min",
        order.time_range.min, order.time_range.max
    );
    println!("  Shopkeeper   : \"{}\"", order.note);
    println!();
}

/// Print a round verdict: points and one line per rule.
pub fn display_verdict(verdict: &Verdict) {
    println!();
    println!("--- Round Result: {} pts ---", verdict.points);
    for reason in &verdict.reasons {
        println!("  - {}", reason);
    }
    println!();
}

/// Print the round banner with the running totals and remaining time.
pub fn display_round_header(session: &GameSession, now: Instant) {
    println!();
    println!(
        "Round {} | difficulty: {} | total: {} pts",
        session.round(),
        session.difficulty(),
        session.total_score()
    );
    if let Some(rem) = session.remaining(now) {
        println!("Time remaining: {}s", rem.as_secs());
    }
}

/// Print the end-of-session summary.
pub fn display_session_summary(session: &GameSession) {
    println!();
    println!("=== Session Summary ===");
    println!("Rounds played: {}", session.round());
    println!("Total score:   {} pts", session.total_score());
    if session.round() > 0 {
        println!(
            "Average round: {:.1} pts",
            session.total_score() as f64 / session.round() as f64
        );
    }
    println!();
}
