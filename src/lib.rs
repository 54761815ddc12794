pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod sim;
pub mod state;

pub use error::{GameError, Result};
pub use models::{Attempt, Order, Verdict};
