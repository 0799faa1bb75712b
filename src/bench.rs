//! Timing harness comparing the two layouts.

mod config;
mod harness;
mod report;
mod timing;

pub use config::{BenchConfig, EXECUTIONS_PER_TRIAL, NUM_TRIALS, PARTICLE_COUNTS};
pub use harness::{BenchRow, Harness, speedup};
pub use report::{format_row, group_thousands, header, rule, version_banner};
pub use timing::min_per_call;
