use rand::Rng;

use crate::particles::types::{MASS_OFFSET, MASS_SCALE, Particle};

/// Uniform coordinate in [0, 1)
pub fn sample_coordinate<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}

/// Uniform mass in [0.1, 10.1), never zero
pub fn sample_mass<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0) * MASS_SCALE + MASS_OFFSET
}

pub fn sample_particle<R: Rng + ?Sized>(rng: &mut R) -> Particle {
    Particle {
        x: sample_coordinate(rng),
        y: sample_coordinate(rng),
        z: sample_coordinate(rng),
        mass: sample_mass(rng),
    }
}

// One attribute column for the SoA layout
pub(crate) fn sample_column<R, F>(n: usize, rng: &mut R, mut sample: F) -> Vec<f64>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> f64,
{
    (0..n).map(|_| sample(&mut *rng)).collect()
}
