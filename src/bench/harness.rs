use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bench::config::BenchConfig;
use crate::bench::timing::min_per_call;
use crate::particles::{AosParticles, ParticleSet, SoaParticles};

/// Timings for one particle count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRow {
    pub particles: usize,
    pub aos_seconds: f64,
    pub soa_seconds: f64,
    pub speedup: f64,
}

/// AoS time over SoA time, infinite when the SoA time is zero.
pub fn speedup(aos_seconds: f64, soa_seconds: f64) -> f64 {
    if soa_seconds > 0.0 {
        aos_seconds / soa_seconds
    } else {
        f64::INFINITY
    }
}

/// Drives the benchmark: for each configured count build both stores,
/// time both kernels and hand a [`BenchRow`] to the caller.
pub struct Harness {
    config: BenchConfig,
    rng: StdRng,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Measure every configured count in order.
    pub fn run<F: FnMut(BenchRow)>(&mut self, mut sink: F) {
        let counts = self.config.particle_counts.clone();
        for n in counts {
            sink(self.measure(n));
        }
    }

    /// Measure a single count; store construction stays outside the timed region.
    pub fn measure(&mut self, n: usize) -> BenchRow {
        info!("measuring {n} particles");

        let aos = AosParticles::generate(n, &mut self.rng);
        let soa = SoaParticles::generate(n, &mut self.rng);

        let aos_seconds = self.time_kernel(&aos);
        let soa_seconds = self.time_kernel(&soa);

        let row = BenchRow {
            particles: n,
            aos_seconds,
            soa_seconds,
            speedup: speedup(aos_seconds, soa_seconds),
        };
        debug!("{row:?}");
        row
    }

    fn time_kernel<S: ParticleSet>(&self, set: &S) -> f64 {
        debug!("{}: {} particles, {} bytes", set.name(), set.len(), set.footprint_bytes());

        let per_call = min_per_call(self.config.trials(), self.config.executions(), || set.centroid());
        debug!("{}: {per_call:.9} s per centroid", set.name());
        per_call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            particle_counts: vec![0, 1, 2_000, 20_000],
            trials: 3,
            executions: 2,
            seed: Some(42),
        }
    }

    #[test]
    fn speedup_divides_times() {
        assert_eq!(speedup(3.0, 1.5), 2.0);
        assert_eq!(speedup(1.0, 4.0), 0.25);
    }

    #[test]
    fn zero_soa_time_is_infinite_speedup() {
        assert_eq!(speedup(1.0, 0.0), f64::INFINITY);
        assert_eq!(speedup(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn runs_counts_in_order() {
        let mut harness = Harness::new(small_config());
        let mut seen = Vec::new();
        harness.run(|row| seen.push(row.particles));
        assert_eq!(seen, harness.config().particle_counts);
    }

    #[test]
    fn timings_are_positive_for_real_work() {
        let mut harness = Harness::new(small_config());
        let row = harness.measure(20_000);
        assert_eq!(row.particles, 20_000);
        assert!(row.aos_seconds > 0.0 && row.aos_seconds.is_finite());
        assert!(row.soa_seconds > 0.0 && row.soa_seconds.is_finite());
        assert!(row.speedup > 0.0 && row.speedup.is_finite());
    }

    #[test]
    fn empty_count_does_not_fail() {
        let mut harness = Harness::new(small_config());
        let row = harness.measure(0);
        assert!(row.aos_seconds >= 0.0 && row.soa_seconds >= 0.0);
        assert!(!row.speedup.is_nan() && row.speedup >= 0.0);
    }
}
