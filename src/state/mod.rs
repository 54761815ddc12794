mod session;

pub use session::{DraftAttempt, GameSession, RoundPhase};
