//! Particle stores in two memory layouts and their centroid kernels.

mod aos;
mod init;
mod soa;
mod trait_def;
mod types;

pub use aos::AosParticles;
pub use init::{sample_coordinate, sample_mass, sample_particle};
pub use soa::SoaParticles;
pub use trait_def::ParticleSet;
pub use types::{Centroid, MASS_OFFSET, MASS_SCALE, Particle};
