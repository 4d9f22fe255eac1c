//! Scene bootstrap: camera, fog, lights and renderer settings.

use serde::Serialize;

use crate::api::config::ShowConfig;
use crate::api::types::Color;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::Viewport;
use crate::systems::lighting::LightRig;

/// Exponential-squared fog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self { color: Color(0x05050a), density: 0.002 }
    }
}

/// Context and output settings the host applies to its renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RendererSettings {
    pub antialias: bool,
    pub alpha: bool,
    pub power_preference: &'static str,
    pub tone_mapping: &'static str,
    pub exposure: f32,
    pub max_pixel_ratio: f32,
}

impl RendererSettings {
    pub fn new(max_pixel_ratio: f32) -> Self {
        Self {
            antialias: true,
            alpha: true,
            power_preference: "high-performance",
            tone_mapping: "aces_filmic",
            exposure: 1.0,
            max_pixel_ratio,
        }
    }
}

pub struct Stage {
    pub camera: PerspectiveCamera,
    pub fog: Fog,
    pub lights: LightRig,
    pub renderer: RendererSettings,
    viewport: Viewport,
}

impl Stage {
    pub fn new(config: &ShowConfig, viewport: Viewport) -> Self {
        let viewport = viewport.capped(config.surface.max_pixel_ratio);
        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(cam.fov, viewport.aspect().unwrap_or(1.0), cam.near, cam.far);
        camera.position = config.intro.start;
        Self {
            camera,
            fog: Fog::default(),
            lights: LightRig::solar(),
            renderer: RendererSettings::new(config.surface.max_pixel_ratio),
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new surface size. Idempotent; a collapsed surface keeps the
    /// previous camera aspect.
    pub fn resize(&mut self, viewport: Viewport) -> Viewport {
        self.viewport = viewport.capped(self.renderer.max_pixel_ratio);
        self.camera.set_viewport(self.viewport.width, self.viewport.height);
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_defaults() {
        let stage = Stage::new(&ShowConfig::default(), Viewport::new(1600.0, 900.0, 3.0));
        assert_eq!(stage.camera.fov, 60.0);
        assert_eq!(stage.camera.near, 0.1);
        assert_eq!(stage.camera.far, 5000.0);
        assert!((stage.camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(stage.viewport().pixel_ratio, 2.0);
        assert_eq!(stage.fog, Fog { color: Color(0x05050a), density: 0.002 });
        assert_eq!(stage.lights.count(), 3);
        assert_eq!(stage.renderer.tone_mapping, "aces_filmic");
    }

    #[test]
    fn resize_tracks_aspect() {
        let mut stage = Stage::new(&ShowConfig::default(), Viewport::default());
        stage.resize(Viewport::new(1000.0, 500.0, 1.0));
        assert_eq!(stage.camera.aspect, 2.0);
        stage.resize(Viewport::new(1000.0, 500.0, 1.0));
        assert_eq!(stage.camera.aspect, 2.0);
        stage.resize(Viewport::new(1000.0, 0.0, 1.0));
        assert_eq!(stage.camera.aspect, 2.0);
        assert_eq!(stage.viewport().height, 0.0);
    }
}
