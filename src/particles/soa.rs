use rand::Rng;

use crate::particles::aos::AosParticles;
use crate::particles::init::{sample_column, sample_coordinate, sample_mass};
use crate::particles::trait_def::ParticleSet;
use crate::particles::types::{Centroid, Particle};

/// Structure-of-Arrays layout: one contiguous column per attribute.
///
/// Index `i` of every column belongs to particle `i`. The columns are only
/// ever built together and exposed as slices, so their lengths cannot drift
/// apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoaParticles {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    masses: Vec<f64>,
}

impl SoaParticles {
    /// Transpose an AoS store, keeping every value bit-for-bit.
    pub fn from_aos(aos: &AosParticles) -> Self {
        Self::from_particles(aos.particles())
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Reassemble particle `i` from the four columns.
    pub fn get(&self, i: usize) -> Option<Particle> {
        Some(Particle::new(
            *self.xs.get(i)?,
            *self.ys.get(i)?,
            *self.zs.get(i)?,
            *self.masses.get(i)?,
        ))
    }

    fn weighted_sum(axis: &[f64], masses: &[f64]) -> f64 {
        axis.iter().zip(masses).map(|(a, m)| a * m).sum()
    }
}

impl ParticleSet for SoaParticles {
    fn name(&self) -> &str {
        "SoA"
    }

    fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let xs = sample_column(n, rng, sample_coordinate);
        let ys = sample_column(n, rng, sample_coordinate);
        let zs = sample_column(n, rng, sample_coordinate);
        let masses = sample_column(n, rng, sample_mass);
        Self { xs, ys, zs, masses }
    }

    fn from_particles(particles: &[Particle]) -> Self {
        Self {
            xs: particles.iter().map(|p| p.x).collect(),
            ys: particles.iter().map(|p| p.y).collect(),
            zs: particles.iter().map(|p| p.z).collect(),
            masses: particles.iter().map(|p| p.mass).collect(),
        }
    }

    fn len(&self) -> usize {
        self.masses.len()
    }

    // Every pass is a linear scan over one or two dense f64 columns
    fn centroid(&self) -> Centroid {
        let total_mass: f64 = self.masses.iter().sum();
        if total_mass == 0.0 {
            return Centroid::ZERO;
        }

        let x = Self::weighted_sum(&self.xs, &self.masses);
        let y = Self::weighted_sum(&self.ys, &self.masses);
        let z = Self::weighted_sum(&self.zs, &self.masses);
        Centroid::new(x, y, z) / total_mass
    }

    fn footprint_bytes(&self) -> usize {
        [&self.xs, &self.ys, &self.zs, &self.masses]
            .iter()
            .map(|column| std::mem::size_of_val(column.as_slice()))
            .sum()
    }
}
