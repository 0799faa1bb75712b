//! Array-of-Structures vs Structure-of-Arrays centroid benchmark.

pub mod app;
pub mod bench;
pub mod particles;
