use serde::{Deserialize, Serialize};

use crate::models::CookMethod;

/// One player submission for a round.
///
/// Transient: scored once against the round's order, then discarded. An empty
/// ingredient list is a valid (low-scoring) attempt, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// Filling ingredients the player chose.
    pub ingredients: Vec<String>,

    /// Pleat count on the finished dumpling.
    pub pleats: u32,

    /// Chosen cooking method.
    pub method: CookMethod,

    /// Cook time in minutes.
    pub cook_time: f64,
}

impl Attempt {
    pub fn contains(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

/// Result of scoring an attempt against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Final score, clamped into 0..=100.
    pub points: i32,

    /// One reason line per scoring rule, in rule order.
    pub reasons: Vec<String>,
}
