use log::info;

use crate::bench::{BenchConfig, Harness, format_row, header, rule, version_banner};

pub fn run() {
    // Initialize logger
    env_logger::init();

    let config = BenchConfig::default();
    info!(
        "{} counts, {} trials x {} calls each",
        config.particle_counts.len(),
        config.trials(),
        config.executions()
    );

    println!("{}", version_banner());
    println!("{}", header());
    println!("{}", rule());

    // Rows are printed as soon as each count finishes
    let mut harness = Harness::new(config);
    harness.run(|row| println!("{}", format_row(&row)));
}
