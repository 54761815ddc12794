use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{GameError, Result};

/// Every ingredient the shop stocks. Proteins first.
pub const PANTRY: [&str; 11] = [
    "pork",
    "chicken",
    "shrimp",
    "tofu",
    "chive",
    "onion",
    "garlic",
    "kimchi",
    "glass noodle",
    "shiitake",
    "carrot",
];

/// Ingredients that can serve as an order's main protein.
pub const PROTEINS: [&str; 4] = ["pork", "chicken", "shrimp", "tofu"];

/// Shopkeeper notes attached to orders. Flavor text only.
pub const ORDER_NOTES: [&str; 5] = [
    "Juicy inside, crisp outside!",
    "The customer dislikes strong aromas.",
    "Texture matters — nothing chewy!",
    "Prefers a clean, mild taste.",
    "Loves a little spicy kick.",
];

// ─────────────────────────────────────────────────────────────────────────────
// Scoring rule point values
// ─────────────────────────────────────────────────────────────────────────────

/// Points for including the required protein.
pub const PROTEIN_POINTS: i32 = 30;

/// Points per must-have ingredient present (partial credit).
pub const MUST_HAVE_POINTS_EACH: i32 = 10;

/// Penalty per off-limits ingredient present.
pub const AVOID_PENALTY_EACH: i32 = 15;

/// Bonus per optional mix ingredient present.
pub const MIX_BONUS_EACH: i32 = 5;

/// Points for a pleat count inside the order's range.
pub const PLEAT_POINTS: i32 = 20;

/// Penalty per pleat of distance outside the range, capped at PLEAT_POINTS.
pub const PLEAT_PENALTY_PER_STEP: i32 = 4;

/// Points for matching the cooking method.
pub const METHOD_POINTS: i32 = 20;

/// Flat penalty for the wrong cooking method.
pub const METHOD_MISMATCH_PENALTY: i32 = 10;

/// Points for a cook time inside the order's window.
pub const TIME_POINTS: i32 = 15;

/// Penalty per minute of distance outside the window, capped at TIME_POINTS.
pub const TIME_PENALTY_PER_MINUTE: f64 = 5.0;

/// Final score bounds.
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

/// Jaro-Winkler similarity required to accept a fuzzy ingredient match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Map from ingredient name to its display emoji.
pub static INGREDIENT_EMOJI: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("pork", "🐖");
    m.insert("chicken", "🐓");
    m.insert("shrimp", "🦐");
    m.insert("tofu", "🧀");
    m.insert("chive", "🌿");
    m.insert("onion", "🧅");
    m.insert("garlic", "🧄");
    m.insert("kimchi", "🥬");
    m.insert("glass noodle", "🍜");
    m.insert("shiitake", "🍄");
    m.insert("carrot", "🥕");
    m
});

/// Get the emoji for an ingredient, or a placeholder for unknowns.
pub fn ingredient_emoji(name: &str) -> &'static str {
    INGREDIENT_EMOJI.get(name).unwrap_or(&"🥟")
}

/// Resolve a free-typed name to a pantry ingredient.
///
/// Tries an exact case-insensitive match first, then the closest fuzzy match
/// above FUZZY_MATCH_THRESHOLD.
pub fn resolve_ingredient(input: &str) -> Result<&'static str> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return Err(GameError::InvalidInput("empty ingredient name".to_string()));
    }

    if let Some(name) = PANTRY.iter().find(|n| **n == wanted) {
        return Ok(name);
    }

    let best = PANTRY
        .iter()
        .map(|n| (*n, strsim::jaro_winkler(n, &wanted)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((name, score)) if score > FUZZY_MATCH_THRESHOLD => Ok(name),
        _ => Err(GameError::UnknownIngredient(input.trim().to_string())),
    }
}

/// Resolve a list of free-typed names, skipping empty entries.
pub fn resolve_ingredients(inputs: &[String]) -> Result<Vec<String>> {
    let mut resolved = Vec::new();
    for input in inputs {
        if input.trim().is_empty() {
            continue;
        }
        let name = resolve_ingredient(input)?;
        if !resolved.iter().any(|r| r == name) {
            resolved.push(name.to_string());
        }
    }
    Ok(resolved)
}
