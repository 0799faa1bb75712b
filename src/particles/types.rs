use bytemuck::{Pod, Zeroable};
use glam::DVec3;

// Generation ranges: positions in [0, 1), mass in [MASS_OFFSET, MASS_OFFSET + MASS_SCALE)
pub const MASS_SCALE: f64 = 10.0;
pub const MASS_OFFSET: f64 = 0.1;

/// Mass-weighted average position of a particle set.
///
/// A set whose total mass is zero has no centroid; the kernels return
/// [`DVec3::ZERO`] for it instead.
pub type Centroid = DVec3;

// One AoS record, all four attributes packed into 32 contiguous bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub mass: f64,
}

impl Particle {
    pub const fn new(x: f64, y: f64, z: f64, mass: f64) -> Self {
        Self { x, y, z, mass }
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}
