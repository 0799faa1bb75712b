use rand::Rng;

use crate::particles::init::sample_particle;
use crate::particles::trait_def::ParticleSet;
use crate::particles::types::{Centroid, Particle};

/// Array-of-Structures layout: one contiguous run of `(x, y, z, mass)` records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AosParticles {
    particles: Vec<Particle>,
}

impl AosParticles {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl ParticleSet for AosParticles {
    fn name(&self) -> &str {
        "AoS"
    }

    fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(n);
        for _ in 0..n {
            particles.push(sample_particle(rng));
        }
        Self { particles }
    }

    fn from_particles(particles: &[Particle]) -> Self {
        Self {
            particles: particles.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.particles.len()
    }

    // Each pass reads one field per record, striding 32 bytes between reads
    fn centroid(&self) -> Centroid {
        let total_mass: f64 = self.particles.iter().map(|p| p.mass).sum();
        if total_mass == 0.0 {
            return Centroid::ZERO;
        }

        let x = self.particles.iter().map(|p| p.x * p.mass).sum::<f64>();
        let y = self.particles.iter().map(|p| p.y * p.mass).sum::<f64>();
        let z = self.particles.iter().map(|p| p.z * p.mass).sum::<f64>();
        Centroid::new(x, y, z) / total_mass
    }

    fn footprint_bytes(&self) -> usize {
        bytemuck::cast_slice::<Particle, u8>(&self.particles).len()
    }
}
