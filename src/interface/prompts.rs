use std::time::Instant;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::engine::constants::{ingredient_emoji, PANTRY};
use crate::error::{GameError, Result};
use crate::models::CookMethod;
use crate::state::GameSession;

/// How attempt collection is paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectStyle {
    /// Everything on one pass.
    SingleScreen,
    /// Separate steps for filling, shaping, and timing.
    Wizard,
}

/// Prompt for filling ingredients from the pantry.
pub fn prompt_ingredients() -> Result<Vec<String>> {
    let labels: Vec<String> = PANTRY
        .iter()
        .map(|i| format!("{} {}", ingredient_emoji(i), i))
        .collect();

    let picks = MultiSelect::new()
        .with_prompt("Pick the filling (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picks.into_iter().map(|i| PANTRY[i].to_string()).collect())
}

/// Prompt for a pleat count.
pub fn prompt_pleats(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Pleats (4-16)")
        .default(default.to_string())
        .interact_text()?;

    let pleats: u32 = input
        .trim()
        .parse()
        .map_err(|_| GameError::InvalidInput("Invalid pleat count".to_string()))?;

    if !(1..=30).contains(&pleats) {
        return Err(GameError::InvalidInput(
            "Pleat count must be between 1 and 30".to_string(),
        ));
    }

    Ok(pleats)
}

/// Prompt for a cooking method.
pub fn prompt_method(default: CookMethod) -> Result<CookMethod> {
    let labels: Vec<String> = CookMethod::ALL.iter().map(|m| m.to_string()).collect();
    let default_idx = CookMethod::ALL
        .iter()
        .position(|m| *m == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Cooking method")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(CookMethod::ALL[selection])
}

/// Prompt for a cook time in minutes.
pub fn prompt_cook_time(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Cook time in minutes (2.0-12.0)")
        .default(format!("{:.1}", default))
        .interact_text()?;

    let minutes: f64 = input
        .trim()
        .parse()
        .map_err(|_| GameError::InvalidInput("Invalid cook time".to_string()))?;

    if !(0.5..=30.0).contains(&minutes) {
        return Err(GameError::InvalidInput(
            "Cook time must be between 0.5 and 30 minutes".to_string(),
        ));
    }

    Ok(minutes)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn show_remaining(session: &GameSession) {
    if let Some(rem) = session.remaining(Instant::now()) {
        println!("  ({}s left)", rem.as_secs());
    }
}

/// Collect the attempt into the session's draft, polling the round deadline
/// between prompts. Returns true if the deadline tripped before all fields
/// were entered; the caller then submits whatever was gathered.
pub fn collect_attempt(session: &mut GameSession, style: CollectStyle) -> Result<bool> {
    let order = session
        .current_order()
        .ok_or(GameError::OutOfPhase("collect_attempt"))?;
    let pleat_default = order.pleat_range.min;
    let method_default = order.method;
    let time_default = order.time_range.midpoint();

    if style == CollectStyle::Wizard {
        println!();
        println!("── Step 1/3: the filling ──");
    }
    show_remaining(session);

    let ingredients = prompt_ingredients()?;
    session.set_ingredients(ingredients)?;
    if session.deadline_passed(Instant::now()) {
        return Ok(true);
    }

    if style == CollectStyle::Wizard {
        println!();
        println!("── Step 2/3: the shape ──");
        show_remaining(session);
    }

    let pleats = prompt_pleats(pleat_default)?;
    session.set_pleats(pleats)?;
    if session.deadline_passed(Instant::now()) {
        return Ok(true);
    }

    if style == CollectStyle::Wizard {
        println!();
        println!("── Step 3/3: the stove ──");
        show_remaining(session);
    }

    let method = prompt_method(method_default)?;
    session.set_method(method)?;
    if session.deadline_passed(Instant::now()) {
        return Ok(true);
    }

    let minutes = prompt_cook_time(time_default)?;
    session.set_cook_time(minutes)?;

    Ok(session.deadline_passed(Instant::now()))
}
