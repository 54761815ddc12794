use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::{generate_order, score};
use crate::models::Difficulty;
use crate::sim::policy::{build_attempt, AttemptPolicy};

/// Configuration for a balance simulation run.
pub struct SimConfig {
    /// Rounds played per (difficulty, policy) cell.
    pub rounds: usize,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 500,
            seed: 123,
        }
    }
}

/// Score distribution for one (difficulty, policy) cell.
#[derive(Debug)]
pub struct CellReport {
    pub difficulty: Difficulty,
    pub policy: AttemptPolicy,
    pub mean: f64,
    pub min: i32,
    pub max: i32,
}

/// Play `rounds` seeded rounds for every difficulty under every attempt
/// policy and collect score distributions. Useful for sanity-checking the
/// content tables after edits: perfect play must stay at 100 and random play
/// should land well below it at every difficulty.
pub fn run_simulation(config: &SimConfig) -> Vec<CellReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reports = Vec::new();

    for difficulty in Difficulty::ALL {
        for policy in AttemptPolicy::ALL {
            let mut total: i64 = 0;
            let mut min = i32::MAX;
            let mut max = i32::MIN;

            for _ in 0..config.rounds {
                let order = generate_order(difficulty, &mut rng);
                let attempt = build_attempt(policy, &order, &mut rng);
                let verdict = score(&order, &attempt);

                total += verdict.points as i64;
                min = min.min(verdict.points);
                max = max.max(verdict.points);
            }

            reports.push(CellReport {
                difficulty,
                policy,
                mean: total as f64 / config.rounds.max(1) as f64,
                min,
                max,
            });
        }
    }

    reports
}

/// Print a simulation report as an aligned table.
pub fn print_report(reports: &[CellReport]) {
    println!();
    println!(
        "{:<8} {:<16} {:>7} {:>5} {:>5}",
        "diff", "policy", "mean", "min", "max"
    );
    for cell in reports {
        println!(
            "{:<8} {:<16} {:>7.1} {:>5} {:>5}",
            cell.difficulty.to_string(),
            cell.policy.to_string(),
            cell.mean,
            cell.min,
            cell.max
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_run() -> Vec<CellReport> {
        run_simulation(&SimConfig {
            rounds: 50,
            seed: 7,
        })
    }

    #[test]
    fn test_perfect_policy_always_scores_100() {
        for cell in small_run() {
            if cell.policy == AttemptPolicy::Perfect {
                assert_eq!(cell.min, 100);
                assert_eq!(cell.max, 100);
            }
        }
    }

    #[test]
    fn test_timeout_default_is_deterministic_55() {
        // Empty filling, minimum pleats, matching method, midpoint time:
        // 0 + 0 + 0 + 0 + 20 + 20 + 15 = 55 at every difficulty.
        for cell in small_run() {
            if cell.policy == AttemptPolicy::TimeoutDefault {
                assert_eq!(cell.min, 55);
                assert_eq!(cell.max, 55);
            }
        }
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        for cell in small_run() {
            assert!(cell.min >= 0);
            assert!(cell.max <= 100);
            assert!(cell.mean >= cell.min as f64 && cell.mean <= cell.max as f64);
        }
    }

    #[test]
    fn test_random_play_loses_to_perfect_play() {
        let reports = small_run();
        for difficulty in Difficulty::ALL {
            let perfect = reports
                .iter()
                .find(|c| c.difficulty == difficulty && c.policy == AttemptPolicy::Perfect)
                .unwrap();
            let random = reports
                .iter()
                .find(|c| c.difficulty == difficulty && c.policy == AttemptPolicy::Random)
                .unwrap();
            assert!(random.mean < perfect.mean);
        }
    }
}
