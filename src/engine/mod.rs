pub mod constants;
pub mod generator;
pub mod scoring;

pub use constants::{resolve_ingredient, resolve_ingredients};
pub use generator::{generate_order, method_time_range};
pub use scoring::{default_attempt, score};
