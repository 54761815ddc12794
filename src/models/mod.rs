mod attempt;
mod order;

pub use attempt::{Attempt, Verdict};
pub use order::{CookMethod, Difficulty, Order, PleatRange, TimeRange};
