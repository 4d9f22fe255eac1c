//! Scene lights.
//!
//! Lights are persistent: they are set up once at bootstrap and handed
//! to the host in the scene manifest. The host library does the shading.

use glam::Vec3;
use serde::Serialize;

use crate::api::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    /// Uniform fill from every direction.
    Ambient { color: Color, intensity: f32 },
    /// Omnidirectional light with a falloff distance (0 = infinite).
    Point {
        color: Color,
        intensity: f32,
        distance: f32,
        position: Vec3,
    },
    /// Parallel rays shining from `position` toward the origin.
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// The set of lights in the scene.
#[derive(Debug, Clone, Default)]
pub struct LightRig {
    lights: Vec<Light>,
}

impl LightRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-light setup of the show: a dim blue-grey ambient fill, the
    /// sun as a point light at the origin, and a blue rim light from behind.
    pub fn solar() -> Self {
        let mut rig = Self::new();
        rig.add(Light::Ambient { color: Color(0x202030), intensity: 0.4 });
        rig.add(Light::Point {
            color: Color(0xfff0dd),
            intensity: 2.5,
            distance: 1200.0,
            position: Vec3::ZERO,
        });
        rig.add(Light::Directional {
            color: Color(0x4040ff),
            intensity: 0.5,
            position: Vec3::new(0.0, 20.0, -100.0),
        });
        rig
    }

    pub fn add(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    pub fn as_slice(&self) -> &[Light] {
        &self.lights
    }

    /// Number of lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_rig_has_one_of_each_kind() {
        let rig = LightRig::solar();
        assert_eq!(rig.count(), 3);
        assert!(matches!(rig.as_slice()[0], Light::Ambient { .. }));
        assert!(matches!(rig.as_slice()[1], Light::Point { position, .. } if position == Vec3::ZERO));
        assert!(matches!(rig.as_slice()[2], Light::Directional { .. }));
    }

    #[test]
    fn sunlight_dominates() {
        let rig = LightRig::solar();
        let strongest = rig
            .iter()
            .max_by(|a, b| a.intensity().total_cmp(&b.intensity()))
            .unwrap();
        assert!(matches!(strongest, Light::Point { .. }));
    }

    #[test]
    fn lights_serialize_with_kind_tag() {
        let json = serde_json::to_value(LightRig::solar().as_slice()).unwrap();
        assert_eq!(json[0]["kind"], "ambient");
        assert_eq!(json[1]["distance"], 1200.0);
        assert_eq!(json[2]["position"], serde_json::json!([0.0, 20.0, -100.0]));
    }
}
