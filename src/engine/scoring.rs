use crate::engine::constants::*;
use crate::models::{Attempt, Order, Verdict};

/// Rule 1: required protein present.
fn protein_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    if attempt.contains(&order.required_protein) {
        (
            PROTEIN_POINTS,
            format!("main protein matched: {}", order.required_protein),
        )
    } else {
        (
            0,
            format!("main protein missing (wanted {})", order.required_protein),
        )
    }
}

/// Rule 2: must-have coverage, partial credit per item.
fn must_have_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    let hits: Vec<&str> = order
        .must_have
        .iter()
        .filter(|i| attempt.contains(i))
        .map(String::as_str)
        .collect();

    let points = MUST_HAVE_POINTS_EACH * hits.len() as i32;
    let reason = if hits.len() == order.must_have.len() {
        if order.must_have.is_empty() {
            "no must-have ingredients demanded".to_string()
        } else {
            format!("all must-haves included: {}", order.must_have.join(", "))
        }
    } else {
        let missing: Vec<&str> = order
            .must_have
            .iter()
            .filter(|i| !attempt.contains(i))
            .map(String::as_str)
            .collect();
        format!("must-haves missing: {}", missing.join(", "))
    };
    (points, reason)
}

/// Rule 3: off-limits ingredient penalty.
fn avoid_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    let hits: Vec<&str> = order
        .avoid
        .iter()
        .filter(|i| attempt.contains(i))
        .map(String::as_str)
        .collect();

    if hits.is_empty() {
        (0, "no off-limits ingredients used".to_string())
    } else {
        let penalty = AVOID_PENALTY_EACH * hits.len() as i32;
        (
            -penalty,
            format!("off-limits included: {} (-{} pts)", hits.join(", "), penalty),
        )
    }
}

/// Rule 4: optional mix bonus.
fn mix_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    let hits: Vec<&str> = order
        .optional_mixes
        .iter()
        .filter(|i| attempt.contains(i))
        .map(String::as_str)
        .collect();

    if hits.is_empty() {
        (0, "no bonus mixes added".to_string())
    } else {
        let bonus = MIX_BONUS_EACH * hits.len() as i32;
        (
            bonus,
            format!("crowd-pleasing mixes: {} (+{} pts)", hits.join(", "), bonus),
        )
    }
}

/// Rule 5: pleat-count fit. Outside the range costs points per pleat of
/// distance to the nearest bound, capped at the in-range reward.
fn pleat_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    if order.pleat_range.contains(attempt.pleats) {
        (
            PLEAT_POINTS,
            format!("pleat count on target ({})", attempt.pleats),
        )
    } else {
        let distance = order.pleat_range.distance(attempt.pleats) as i32;
        let penalty = PLEAT_POINTS.min(PLEAT_PENALTY_PER_STEP * distance);
        (
            -penalty,
            format!(
                "pleats outside {}..{}: {} (-{} pts)",
                order.pleat_range.min, order.pleat_range.max, attempt.pleats, penalty
            ),
        )
    }
}

/// Rule 6: cooking method match.
fn method_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    if attempt.method == order.method {
        (METHOD_POINTS, format!("method matched: {}", attempt.method))
    } else {
        (
            -METHOD_MISMATCH_PENALTY,
            format!(
                "wrong method: {} (wanted {}, -{} pts)",
                attempt.method, order.method, METHOD_MISMATCH_PENALTY
            ),
        )
    }
}

/// Rule 7: cook-time fit. Outside the window costs points per minute of
/// distance to the nearest bound, rounded, capped at the in-window reward.
fn time_rule(order: &Order, attempt: &Attempt) -> (i32, String) {
    if order.time_range.contains(attempt.cook_time) {
        (
            TIME_POINTS,
            format!("cook time on target ({} min)", attempt.cook_time),
        )
    } else {
        let off = order.time_range.distance(attempt.cook_time);
        let penalty = TIME_POINTS.min((off * TIME_PENALTY_PER_MINUTE).round() as i32);
        (
            -penalty,
            format!(
                "cook time outside {}..{} min: {} min (-{} pts)",
                order.time_range.min, order.time_range.max, attempt.cook_time, penalty
            ),
        )
    }
}

/// Score an attempt against an order.
///
/// Seven additive rules, applied in fixed order, none short-circuiting
/// another. Each appends exactly one reason line. The signed sum is clamped
/// into 0..=100; a flawless attempt sums past 100 and relies on the clamp.
pub fn score(order: &Order, attempt: &Attempt) -> Verdict {
    let rules: [fn(&Order, &Attempt) -> (i32, String); 7] = [
        protein_rule,
        must_have_rule,
        avoid_rule,
        mix_rule,
        pleat_rule,
        method_rule,
        time_rule,
    ];

    let mut points = 0;
    let mut reasons = Vec::with_capacity(rules.len());
    for rule in rules {
        let (delta, reason) = rule(order, attempt);
        points += delta;
        reasons.push(reason);
    }

    Verdict {
        points: points.clamp(SCORE_MIN, SCORE_MAX),
        reasons,
    }
}

/// Build the attempt a round falls back to when the deadline passes with
/// fields unset: empty filling, minimum pleats, the order's own method, and
/// the midpoint of the time window.
pub fn default_attempt(order: &Order) -> Attempt {
    Attempt {
        ingredients: Vec::new(),
        pleats: order.pleat_range.min,
        method: order.method,
        cook_time: order.time_range.midpoint(),
    }
}
