pub mod policy;
pub mod runner;

pub use policy::{build_attempt, AttemptPolicy};
pub use runner::{print_report, run_simulation, CellReport, SimConfig};
