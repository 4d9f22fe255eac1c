//! Per-frame motion of the sun, the star layers and the planets.
//!
//! Two kinds of motion are mixed here and the split matters: absolute
//! values derived from elapsed time (sun spin, glow pulse, star drift,
//! orbit angle) and fixed per-frame increments (planet, cloud and
//! satellite spin, outer glow twist) that accumulate with the frame rate.

use glam::Vec3;
use serde::Serialize;

use crate::api::config::OrbitConfig;
use crate::bodies::PlanetDescriptor;
use crate::core::scene::SceneGraph;
use crate::factory::{PlanetSystem, StarField, SunNodes};

pub const SUN_SPIN_RATE: f32 = 0.05;
pub const PULSE_AMPLITUDE: f32 = 0.1;
pub const PULSE_RATE: f32 = 2.0;
pub const OUTER_GLOW_FACTOR: f32 = 1.1;
/// Radians per frame, applied about -Z.
pub const OUTER_GLOW_TWIST: f32 = 0.002;
pub const STAR_SPIN_RATE: f32 = 0.01;

/// Orbital angle of one planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitState {
    /// Starting angle, fixed at construction.
    pub phase: f32,
    /// Angle at the last `advance`.
    pub angle: f32,
}

impl OrbitState {
    pub fn new(phase: f32) -> Self {
        Self { phase, angle: phase }
    }

    /// angle = phase + t × speed × scale.
    pub fn advance(&mut self, t: f32, speed: f32, scale: f32) -> f32 {
        self.angle = self.phase + t * speed * scale;
        self.angle
    }
}

/// Point on a circular orbit in the XZ plane.
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Glow breathing factor, oscillating in [0.9, 1.1].
pub fn pulse(t: f32) -> f32 {
    1.0 + (t * PULSE_RATE).sin() * PULSE_AMPLITUDE
}

pub fn animate_sun(graph: &mut SceneGraph, sun: &SunNodes, t: f32) {
    if let Some(node) = graph.get_mut(sun.sun) {
        node.transform.rotation.y = t * SUN_SPIN_RATE;
    }
    let pulse = pulse(t);
    if let Some(glow) = graph.get_mut(sun.glow) {
        glow.transform.scale = Vec3::splat(pulse);
    }
    if let Some(outer) = graph.get_mut(sun.outer_glow) {
        outer.transform.scale = Vec3::splat(pulse * OUTER_GLOW_FACTOR);
        outer.transform.rotation.z -= OUTER_GLOW_TWIST;
    }
}

pub fn animate_stars(graph: &mut SceneGraph, stars: &StarField, t: f32) {
    for id in stars.nodes() {
        if let Some(layer) = graph.get_mut(id) {
            layer.transform.rotation.y = t * STAR_SPIN_RATE;
        }
    }
}

/// Move every planet group along its orbit and spin bodies, clouds and
/// satellite pivots by their per-frame steps.
pub fn animate_planets(
    graph: &mut SceneGraph,
    system: &mut PlanetSystem,
    descriptors: &[PlanetDescriptor],
    t: f32,
    config: &OrbitConfig,
) {
    for ((planet, orbit), data) in system.planets.iter().zip(system.orbits.iter_mut()).zip(descriptors) {
        if let Some(mesh) = graph.get_mut(planet.mesh) {
            mesh.transform.rotation.y += config.spin_step;
        }
        if let Some(clouds) = planet.clouds.and_then(|id| graph.get_mut(id)) {
            clouds.transform.rotation.y += config.cloud_spin_step;
        }

        let angle = orbit.advance(t, data.speed, config.speed_scale);
        if let Some(group) = graph.get_mut(planet.group) {
            let p = orbit_position(angle, data.distance);
            group.transform.position.x = p.x;
            group.transform.position.z = p.z;
        }

        if let Some(pivot) = planet.satellite.and_then(|id| graph.get_mut(id)) {
            pivot.transform.rotation.y -= config.satellite_spin_step;
        }
    }
}
