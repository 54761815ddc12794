use std::time::{Duration, Instant};

use rand::Rng;

use crate::engine::{generate_order, scoring};
use crate::error::{GameError, Result};
use crate::models::{Attempt, CookMethod, Difficulty, Order, Verdict};

/// Where a round currently stands.
///
/// `AwaitingStart -> OrderIssued -> CollectingAttempt -> Scored`, then back to
/// `OrderIssued` on next-round or to `AwaitingStart` on reset.
#[derive(Debug, Clone, Copy)]
pub enum RoundPhase {
    AwaitingStart,
    OrderIssued,
    CollectingAttempt { started_at: Instant },
    Scored,
}

/// Partial player input gathered during `CollectingAttempt`.
///
/// Fields left unset when the round is scored fall back to the order's own
/// defaults: empty filling, minimum pleats, the order's method, and the
/// midpoint of the time window.
#[derive(Debug, Clone, Default)]
pub struct DraftAttempt {
    pub ingredients: Option<Vec<String>>,
    pub pleats: Option<u32>,
    pub method: Option<CookMethod>,
    pub cook_time: Option<f64>,
}

impl DraftAttempt {
    fn finalize(&self, order: &Order) -> Attempt {
        let fallback = scoring::default_attempt(order);
        Attempt {
            ingredients: self.ingredients.clone().unwrap_or(fallback.ingredients),
            pleats: self.pleats.unwrap_or(fallback.pleats),
            method: self.method.unwrap_or(fallback.method),
            cook_time: self.cook_time.unwrap_or(fallback.cook_time),
        }
    }
}

/// Caller-owned state for one play session.
///
/// Sequences order generation, attempt collection, and scoring across rounds.
/// There is no timer thread: the hosting loop polls `deadline_passed` on each
/// refresh and calls `submit` when it trips.
#[derive(Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    time_limit: Option<Duration>,
    round: u32,
    total_score: i32,
    current_order: Option<Order>,
    phase: RoundPhase,
    draft: DraftAttempt,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, time_limit: Option<Duration>) -> Self {
        Self {
            difficulty,
            time_limit,
            round: 0,
            total_score: 0,
            current_order: None,
            phase: RoundPhase::AwaitingStart,
            draft: DraftAttempt::default(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.as_ref()
    }

    /// Start a round: generate a fresh order and bump the round counter.
    pub fn issue_order(&mut self, rng: &mut impl Rng) -> Result<&Order> {
        match self.phase {
            RoundPhase::AwaitingStart | RoundPhase::Scored => {}
            _ => return Err(GameError::OutOfPhase("issue_order")),
        }

        let order = generate_order(self.difficulty, rng);
        self.round += 1;
        self.draft = DraftAttempt::default();
        self.phase = RoundPhase::OrderIssued;
        Ok(self.current_order.insert(order))
    }

    /// Open attempt collection, capturing the monotonic deadline anchor.
    pub fn begin_attempt(&mut self, now: Instant) -> Result<()> {
        match self.phase {
            RoundPhase::OrderIssued => {
                self.phase = RoundPhase::CollectingAttempt { started_at: now };
                Ok(())
            }
            _ => Err(GameError::OutOfPhase("begin_attempt")),
        }
    }

    fn collecting_since(&self) -> Result<Instant> {
        match self.phase {
            RoundPhase::CollectingAttempt { started_at } => Ok(started_at),
            _ => Err(GameError::OutOfPhase("draft input")),
        }
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<String>) -> Result<()> {
        self.collecting_since()?;
        self.draft.ingredients = Some(ingredients);
        Ok(())
    }

    pub fn set_pleats(&mut self, pleats: u32) -> Result<()> {
        self.collecting_since()?;
        self.draft.pleats = Some(pleats);
        Ok(())
    }

    pub fn set_method(&mut self, method: CookMethod) -> Result<()> {
        self.collecting_since()?;
        self.draft.method = Some(method);
        Ok(())
    }

    pub fn set_cook_time(&mut self, minutes: f64) -> Result<()> {
        self.collecting_since()?;
        self.draft.cook_time = Some(minutes);
        Ok(())
    }

    /// Time left before auto-submit, if a limit is set and collection is open.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let limit = self.time_limit?;
        match self.phase {
            RoundPhase::CollectingAttempt { started_at } => {
                Some(limit.saturating_sub(now.duration_since(started_at)))
            }
            _ => None,
        }
    }

    /// Per-refresh deadline poll. True once the round's time is up.
    pub fn deadline_passed(&self, now: Instant) -> bool {
        matches!(self.remaining(now), Some(rem) if rem.is_zero())
    }

    /// Score the round from whatever draft input is held, defaulting the
    /// rest. Called on explicit submission or when the deadline poll trips.
    pub fn submit(&mut self) -> Result<Verdict> {
        self.collecting_since()?;
        let order = self
            .current_order
            .take()
            .ok_or(GameError::OutOfPhase("submit"))?;

        let attempt = self.draft.finalize(&order);
        let verdict = scoring::score(&order, &attempt);
        self.total_score += verdict.points;
        self.draft = DraftAttempt::default();
        self.phase = RoundPhase::Scored;
        Ok(verdict)
    }

    /// Back to a fresh session: zero totals, no order, awaiting start.
    pub fn reset(&mut self) {
        self.round = 0;
        self.total_score = 0;
        self.current_order = None;
        self.draft = DraftAttempt::default();
        self.phase = RoundPhase::AwaitingStart;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_full_round_walk() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Normal, None);
        assert!(matches!(session.phase(), RoundPhase::AwaitingStart));

        session.issue_order(&mut rng).unwrap();
        assert_eq!(session.round(), 1);
        assert!(session.current_order().is_some());

        session.begin_attempt(Instant::now()).unwrap();
        session.set_pleats(8).unwrap();
        let verdict = session.submit().unwrap();
        assert!(matches!(session.phase(), RoundPhase::Scored));
        assert_eq!(session.total_score(), verdict.points);
        assert!(session.current_order().is_none());

        // Scored -> OrderIssued on next round
        session.issue_order(&mut rng).unwrap();
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_out_of_phase_operations_error() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Easy, None);

        assert!(session.begin_attempt(Instant::now()).is_err());
        assert!(session.submit().is_err());
        assert!(session.set_pleats(8).is_err());

        session.issue_order(&mut rng).unwrap();
        // Cannot issue twice without scoring
        assert!(session.issue_order(&mut rng).is_err());
        assert!(session.submit().is_err());
    }

    #[test]
    fn test_timeout_submit_uses_defaults() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Normal, Some(Duration::from_secs(1)));
        let order = session.issue_order(&mut rng).unwrap().clone();

        let start = Instant::now();
        session.begin_attempt(start).unwrap();
        assert!(!session.deadline_passed(start));
        assert!(session.deadline_passed(start + Duration::from_secs(2)));

        // Nothing was entered: the defaulted attempt still lands the method
        // and time rules, so the verdict reflects the order's own fallbacks.
        let verdict = session.submit().unwrap();
        let expected = crate::engine::score(&order, &crate::engine::default_attempt(&order));
        assert_eq!(verdict.points, expected.points);
    }

    #[test]
    fn test_partial_draft_survives_timeout() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Normal, Some(Duration::from_secs(1)));
        let order = session.issue_order(&mut rng).unwrap().clone();

        session.begin_attempt(Instant::now()).unwrap();
        session
            .set_ingredients(vec![order.required_protein.clone()])
            .unwrap();

        let verdict = session.submit().unwrap();
        let mut attempt = crate::engine::default_attempt(&order);
        attempt.ingredients = vec![order.required_protein.clone()];
        assert_eq!(verdict.points, crate::engine::score(&order, &attempt).points);
    }

    #[test]
    fn test_no_time_limit_never_expires() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Hard, None);
        session.issue_order(&mut rng).unwrap();
        let start = Instant::now();
        session.begin_attempt(start).unwrap();
        assert!(!session.deadline_passed(start + Duration::from_secs(3600)));
        assert!(session.remaining(start).is_none());
    }

    #[test]
    fn test_reset_zeroes_session() {
        let mut rng = rng();
        let mut session = GameSession::new(Difficulty::Normal, None);
        session.issue_order(&mut rng).unwrap();
        session.begin_attempt(Instant::now()).unwrap();
        session.submit().unwrap();

        session.reset();
        assert_eq!(session.round(), 0);
        assert_eq!(session.total_score(), 0);
        assert!(session.current_order().is_none());
        assert!(matches!(session.phase(), RoundPhase::AwaitingStart));
    }
}
