use aos_soa_bench::bench::{BenchConfig, Harness, format_row, header, rule};
use aos_soa_bench::particles::{AosParticles, Particle, ParticleSet, SoaParticles};
use approx::assert_relative_eq;

#[test]
fn every_count_gets_positive_timings() {
    let config = BenchConfig {
        particle_counts: vec![5_000, 50_000],
        trials: 3,
        executions: 2,
        seed: Some(2024),
    };
    let mut harness = Harness::new(config);

    let mut rows = Vec::new();
    harness.run(|row| rows.push(row));

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert!(row.aos_seconds > 0.0 && row.aos_seconds.is_finite(), "{row:?}");
        assert!(row.soa_seconds > 0.0 && row.soa_seconds.is_finite(), "{row:?}");
        assert!(row.speedup > 0.0 && row.speedup.is_finite(), "{row:?}");
        assert_eq!(format_row(row).len(), header().len());
    }
    assert!(format_row(&rows[1]).starts_with("      50,000 |"));
    assert_eq!(rule().len(), 60);
}

#[test]
fn both_layouts_agree_on_the_same_particles() {
    let particles: Vec<Particle> = (0..1_000)
        .map(|i| {
            let t = i as f64 / 1_000.0;
            Particle::new(t, 1.0 - t, (t * 7.0).fract(), 0.1 + 10.0 * ((t * 13.0).fract()))
        })
        .collect();

    let aos = AosParticles::from_particles(&particles).centroid();
    let soa = SoaParticles::from_particles(&particles).centroid();

    assert_relative_eq!(aos.x, soa.x, max_relative = 1e-9);
    assert_relative_eq!(aos.y, soa.y, max_relative = 1e-9);
    assert_relative_eq!(aos.z, soa.z, max_relative = 1e-9);
}

#[test]
fn layouts_share_the_abstraction() {
    fn describe<S: ParticleSet>(set: &S) -> (String, usize, bool) {
        (set.name().to_owned(), set.len(), set.centroid().is_finite())
    }

    let particles = [Particle::new(0.2, 0.4, 0.6, 1.0)];
    assert_eq!(describe(&AosParticles::from_particles(&particles)), ("AoS".to_owned(), 1, true));
    assert_eq!(describe(&SoaParticles::from_particles(&particles)), ("SoA".to_owned(), 1, true));
}
