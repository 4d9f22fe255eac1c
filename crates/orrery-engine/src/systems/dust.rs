//! Dust recycling.
//!
//! Particles travel toward +Z at a fixed step per frame. One that passes
//! the far bound restarts exactly at the near bound.

use glam::Vec3;

/// Step every particle forward and wrap the ones past `far`.
/// Depths stay within `[near, far]`.
pub fn advance_dust(positions: &mut [Vec3], step: f32, near: f32, far: f32) {
    for p in positions.iter_mut() {
        p.z += step;
        if p.z > far {
            p.z = near;
        }
    }
}

/// Frames until a particle that has wrapped once returns to the same depth.
pub fn dust_period(step: f32, near: f32, far: f32) -> f32 {
    ((far - near) / step).floor() + 1.0
}
