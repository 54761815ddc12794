use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::constants::{ORDER_NOTES, PANTRY, PROTEINS};
use crate::models::{CookMethod, Difficulty, Order, PleatRange, TimeRange};

/// Round a minute value to one decimal place for display-friendly bounds.
fn round_tenth(minutes: f64) -> f64 {
    (minutes * 10.0).round() / 10.0
}

/// Acceptable cook-time window for a method at a difficulty.
///
/// The method's base interval is shrunk (or widened, on easy) about its
/// midpoint by the difficulty's tightening factor.
pub fn method_time_range(method: CookMethod, difficulty: Difficulty) -> TimeRange {
    let (base_min, base_max) = method.base_time_bounds();
    let span = (base_max - base_min) * difficulty.tightening();
    let mid = (base_min + base_max) / 2.0;
    TimeRange::new(round_tenth(mid - span / 2.0), round_tenth(mid + span / 2.0))
}

/// Generate a customer order for one round.
///
/// Sampling is uniform without replacement from the pantry; the protein,
/// must-have, avoid, and optional-mix picks never overlap. The pantry is
/// large enough for every difficulty by construction, so this cannot fail.
pub fn generate_order(difficulty: Difficulty, rng: &mut impl Rng) -> Order {
    let protein = PROTEINS[rng.gen_range(0..PROTEINS.len())];
    let method = CookMethod::ALL[rng.gen_range(0..CookMethod::ALL.len())];

    let mut pool: Vec<&str> = PANTRY.iter().copied().filter(|i| *i != protein).collect();
    pool.shuffle(rng);

    let must_have: Vec<String> = pool
        .drain(..difficulty.must_have_count())
        .map(String::from)
        .collect();
    let avoid: Vec<String> = pool
        .drain(..difficulty.avoid_count())
        .map(String::from)
        .collect();
    let optional_mixes: Vec<String> = pool.drain(..2).map(String::from).collect();

    let (pleat_min, pleat_max) = difficulty.pleat_bounds();
    let note = ORDER_NOTES[rng.gen_range(0..ORDER_NOTES.len())];

    Order {
        required_protein: protein.to_string(),
        must_have,
        avoid,
        optional_mixes,
        pleat_range: PleatRange::new(pleat_min, pleat_max),
        method,
        time_range: method_time_range(method, difficulty),
        note: note.to_string(),
    }
}
