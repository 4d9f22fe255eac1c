use serde::Serialize;

use crate::api::types::{Color, TextureId};

/// Lighting model the host should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Flat colour/texture, ignores lights.
    #[default]
    Unlit,
    /// Physically based (roughness/metalness), lit by the scene lights.
    Standard,
    /// Screen-facing point sprites.
    Points,
}

/// Blend mode for compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard alpha blending (src-alpha, one-minus-src-alpha).
    #[default]
    Alpha,
    /// Additive blending for glow effects (src-alpha, one).
    Additive,
}

/// Which faces are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub shading: Shading,
    pub color: Color,
    /// Opacity (only honoured when `transparent`).
    pub opacity: f32,
    pub transparent: bool,
    pub blend: BlendMode,
    pub side: Side,
    pub map: Option<TextureId>,
    pub bump_map: Option<TextureId>,
    pub bump_scale: f32,
    pub roughness_map: Option<TextureId>,
    pub roughness: f32,
    pub metalness: f32,
    /// Point size for `Shading::Points`.
    pub size: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shading: Shading::Unlit,
            color: Color::WHITE,
            opacity: 1.0,
            transparent: false,
            blend: BlendMode::Alpha,
            side: Side::Front,
            map: None,
            bump_map: None,
            bump_scale: 1.0,
            roughness_map: None,
            roughness: 1.0,
            metalness: 0.0,
            size: 1.0,
        }
    }
}

impl Material {
    pub fn unlit(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn standard(color: Color) -> Self {
        Self { shading: Shading::Standard, color, ..Self::default() }
    }

    pub fn points(color: Color, size: f32) -> Self {
        Self { shading: Shading::Points, color, size, ..Self::default() }
    }

    // -- Builder pattern --

    /// Set opacity and mark the material transparent.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn with_map(mut self, map: TextureId) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_bump(mut self, map: TextureId, scale: f32) -> Self {
        self.bump_map = Some(map);
        self.bump_scale = scale;
        self
    }

    pub fn with_roughness_map(mut self, map: TextureId) -> Self {
        self.roughness_map = Some(map);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn additive(mut self) -> Self {
        self.blend = BlendMode::Additive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_implies_transparency() {
        let m = Material::unlit(Color(0xffaa00)).with_opacity(0.15);
        assert!(m.transparent);
        assert_eq!(m.opacity, 0.15);
        assert!(!Material::unlit(Color::WHITE).transparent);
    }

    #[test]
    fn builders_compose() {
        let m = Material::standard(Color::WHITE)
            .with_map(TextureId(3))
            .with_bump(TextureId(4), 0.08)
            .with_roughness(0.8)
            .with_metalness(0.1)
            .with_side(Side::Double)
            .additive();
        assert_eq!(m.shading, Shading::Standard);
        assert_eq!(m.map, Some(TextureId(3)));
        assert_eq!(m.bump_map, Some(TextureId(4)));
        assert_eq!(m.bump_scale, 0.08);
        assert_eq!(m.blend, BlendMode::Additive);
        assert_eq!(m.side, Side::Double);
    }
}
