// Constants for the benchmark run
pub const PARTICLE_COUNTS: [usize; 4] = [10_000, 100_000, 1_000_000, 10_000_000];
pub const NUM_TRIALS: usize = 5;
pub const EXECUTIONS_PER_TRIAL: usize = 3;

/// What the harness measures and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Particle counts, measured in this order
    pub particle_counts: Vec<usize>,
    /// Timed trials per layout and count; the fastest one is reported
    pub trials: usize,
    /// Back-to-back kernel calls inside one trial
    pub executions: usize,
    /// Generator seed, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn trials(&self) -> usize {
        self.trials.max(1)
    }

    pub fn executions(&self) -> usize {
        self.executions.max(1)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            particle_counts: PARTICLE_COUNTS.to_vec(),
            trials: NUM_TRIALS,
            executions: EXECUTIONS_PER_TRIAL,
            seed: None,
        }
    }
}
