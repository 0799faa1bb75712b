use std::hint::black_box;
use std::time::{Duration, Instant};

use log::trace;

/// Per-call time in seconds of the fastest of `trials` runs, each run
/// calling `kernel` `executions` times back to back.
///
/// Counts below one are raised to one.
pub fn min_per_call<T, F>(trials: usize, executions: usize, mut kernel: F) -> f64
where
    F: FnMut() -> T,
{
    let executions = executions.max(1);

    let fastest = (0..trials.max(1))
        .map(|trial| {
            let start = Instant::now();
            for _ in 0..executions {
                black_box(kernel());
            }
            let elapsed = start.elapsed();
            trace!("trial {trial}: {executions} calls in {elapsed:?}");
            elapsed
        })
        .min()
        .unwrap_or(Duration::ZERO);

    fastest.as_secs_f64() / executions as f64
}
