use rand::Rng;

use crate::particles::types::{Centroid, Particle};

/// A trait that defines the interface shared by every particle layout
pub trait ParticleSet {
    /// Short layout label used in logs
    fn name(&self) -> &str;

    /// Build a set of `n` particles drawn from `rng`
    fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self
    where
        Self: Sized;

    /// Build a set holding exactly the given particles, in order
    fn from_particles(particles: &[Particle]) -> Self
    where
        Self: Sized;

    /// Number of particles in the set
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mass-weighted centroid, or the zero vector when total mass is zero
    fn centroid(&self) -> Centroid;

    /// Bytes of particle data held by the set
    fn footprint_bytes(&self) -> usize;
}
