use rand::Rng;

use crate::engine::constants::PANTRY;
use crate::engine::scoring;
use crate::models::{Attempt, CookMethod, Order};

/// Fixed strategies a simulated player can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPolicy {
    /// Reads the order and matches every rule.
    Perfect,
    /// Enters nothing; the round times out on the defaulted attempt.
    TimeoutDefault,
    /// Picks everything at random, ignoring the order.
    Random,
}

impl AttemptPolicy {
    pub const ALL: [AttemptPolicy; 3] = [
        AttemptPolicy::Perfect,
        AttemptPolicy::TimeoutDefault,
        AttemptPolicy::Random,
    ];
}

impl std::fmt::Display for AttemptPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttemptPolicy::Perfect => "perfect",
            AttemptPolicy::TimeoutDefault => "timeout-default",
            AttemptPolicy::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// Build the attempt a policy would submit for an order.
pub fn build_attempt(policy: AttemptPolicy, order: &Order, rng: &mut impl Rng) -> Attempt {
    match policy {
        AttemptPolicy::Perfect => {
            let mut ingredients = vec![order.required_protein.clone()];
            ingredients.extend(order.must_have.iter().cloned());
            ingredients.extend(order.optional_mixes.iter().cloned());
            Attempt {
                ingredients,
                pleats: order.pleat_range.midpoint(),
                method: order.method,
                cook_time: order.time_range.midpoint(),
            }
        }
        AttemptPolicy::TimeoutDefault => scoring::default_attempt(order),
        AttemptPolicy::Random => Attempt {
            ingredients: PANTRY
                .iter()
                .filter(|_| rng.gen_bool(0.5))
                .map(|i| i.to_string())
                .collect(),
            pleats: rng.gen_range(4..=16),
            method: CookMethod::ALL[rng.gen_range(0..CookMethod::ALL.len())],
            cook_time: rng.gen_range(2.0..=12.0),
        },
    }
}
