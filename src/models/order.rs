use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Game difficulty. Controls how demanding a generated order is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Number of must-have ingredients an order demands.
    pub fn must_have_count(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Number of off-limits ingredients an order names.
    pub fn avoid_count(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal | Difficulty::Hard => 1,
        }
    }

    /// Acceptable pleat interval, narrower at higher difficulty.
    pub fn pleat_bounds(self) -> (u32, u32) {
        match self {
            Difficulty::Easy => (5, 10),
            Difficulty::Normal => (7, 10),
            Difficulty::Hard => (8, 10),
        }
    }

    /// Multiplier applied to the base cook-time span. Below 1.0 narrows it.
    pub fn tightening(self) -> f64 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.5,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Cooking method for a batch of dumplings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CookMethod {
    Steamed,
    PanFried,
    Boiled,
}

impl CookMethod {
    pub const ALL: [CookMethod; 3] = [CookMethod::Steamed, CookMethod::PanFried, CookMethod::Boiled];

    /// Base acceptable cook-time interval in minutes, before difficulty tightening.
    pub fn base_time_bounds(self) -> (f64, f64) {
        match self {
            CookMethod::Steamed => (7.0, 10.0),
            CookMethod::PanFried => (6.0, 8.0),
            CookMethod::Boiled => (4.0, 6.0),
        }
    }
}

impl std::fmt::Display for CookMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CookMethod::Steamed => "steamed",
            CookMethod::PanFried => "pan-fried",
            CookMethod::Boiled => "boiled",
        };
        write!(f, "{}", name)
    }
}

/// Inclusive pleat-count interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PleatRange {
    pub min: u32,
    pub max: u32,
}

impl PleatRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, pleats: u32) -> bool {
        (self.min..=self.max).contains(&pleats)
    }

    /// Distance from a count outside the interval to the nearest bound.
    /// Zero for counts inside.
    pub fn distance(&self, pleats: u32) -> u32 {
        if pleats < self.min {
            self.min - pleats
        } else if pleats > self.max {
            pleats - self.max
        } else {
            0
        }
    }

    pub fn midpoint(&self) -> u32 {
        (self.min + self.max) / 2
    }
}

/// Inclusive cook-time interval in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, minutes: f64) -> bool {
        minutes >= self.min && minutes <= self.max
    }

    /// Distance in minutes from a time outside the interval to the nearest bound.
    pub fn distance(&self, minutes: f64) -> f64 {
        if minutes < self.min {
            self.min - minutes
        } else if minutes > self.max {
            minutes - self.max
        } else {
            0.0
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A customer order: the target the player must match this round.
///
/// Immutable once generated. The four ingredient fields are pairwise disjoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Main protein; must appear in the attempt for full credit.
    pub required_protein: String,

    /// Ingredients the filling must include (partial credit per item).
    pub must_have: Vec<String>,

    /// Ingredients that cost points if included.
    pub avoid: Vec<String>,

    /// Ingredients that grant a small bonus if included.
    pub optional_mixes: Vec<String>,

    /// Acceptable pleat-count interval.
    pub pleat_range: PleatRange,

    /// Requested cooking method.
    pub method: CookMethod,

    /// Acceptable cook-time interval in minutes.
    pub time_range: TimeRange,

    /// Shopkeeper flavor text. No scoring effect.
    pub note: String,
}

impl Order {
    /// Check the generation invariants: pairwise-disjoint ingredient fields
    /// and ordered intervals.
    pub fn is_well_formed(&self) -> bool {
        let mut seen: Vec<&str> = vec![self.required_protein.as_str()];
        for group in [&self.must_have, &self.avoid, &self.optional_mixes] {
            for item in group {
                if seen.contains(&item.as_str()) {
                    return false;
                }
                seen.push(item);
            }
        }
        self.pleat_range.min <= self.pleat_range.max && self.time_range.min <= self.time_range.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            required_protein: "pork".to_string(),
            must_have: vec!["garlic".to_string(), "onion".to_string()],
            avoid: vec!["carrot".to_string()],
            optional_mixes: vec!["chive".to_string()],
            pleat_range: PleatRange::new(7, 10),
            method: CookMethod::Steamed,
            time_range: TimeRange::new(7.0, 9.0),
            note: "light on the seasoning".to_string(),
        }
    }

    #[test]
    fn test_pleat_range_distance() {
        let range = PleatRange::new(7, 10);
        assert_eq!(range.distance(7), 0);
        assert_eq!(range.distance(10), 0);
        assert_eq!(range.distance(11), 1);
        assert_eq!(range.distance(4), 3);
    }

    #[test]
    fn test_time_range_distance() {
        let range = TimeRange::new(7.0, 9.0);
        assert_eq!(range.distance(8.0), 0.0);
        assert!((range.distance(10.5) - 1.5).abs() < 1e-9);
        assert!((range.distance(5.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(sample_order().is_well_formed());

        let mut bad = sample_order();
        bad.avoid = vec!["garlic".to_string()];
        assert!(!bad.is_well_formed());

        let mut inverted = sample_order();
        inverted.pleat_range = PleatRange::new(10, 7);
        assert!(!inverted.is_well_formed());
    }

    #[test]
    fn test_difficulty_knobs_monotonic() {
        assert!(Difficulty::Easy.must_have_count() < Difficulty::Hard.must_have_count());

        let (easy_min, easy_max) = Difficulty::Easy.pleat_bounds();
        let (hard_min, hard_max) = Difficulty::Hard.pleat_bounds();
        assert!(easy_max - easy_min > hard_max - hard_min);

        assert!(Difficulty::Easy.tightening() > Difficulty::Hard.tightening());
    }
}
