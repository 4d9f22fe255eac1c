//! Show configuration with defaults matching the shipped experience.
//!
//! Every section is `#[serde(default)]`, so a host can pass a partial JSON
//! object (or nothing) and only override what it names.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;
use crate::extensions::easing::Easing;

/// Top-level configuration for a [`SolarShow`](crate::api::show::SolarShow).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShowConfig {
    /// Perspective camera settings.
    pub camera: CameraConfig,
    /// Timed fly-in before scrolling unlocks.
    pub intro: IntroConfig,
    /// Scroll-driven waypoint following.
    pub scroll: ScrollConfig,
    /// Drifting dust pool.
    pub dust: DustConfig,
    /// Orbital motion and self-rotation rates.
    pub orbit: OrbitConfig,
    /// Render surface settings.
    pub surface: SurfaceConfig,
    /// Console log level ("error", "warn", "info", "debug", "trace").
    pub log_level: String,
    /// Fixed RNG seed. `None` lets the host pick one per page load.
    pub seed: Option<u64>,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            intro: IntroConfig::default(),
            scroll: ScrollConfig::default(),
            dust: DustConfig::default(),
            orbit: OrbitConfig::default(),
            surface: SurfaceConfig::default(),
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Base vertical field of view in degrees.
    pub fov: f32,
    /// Upper bound the field of view may widen to while travelling.
    pub max_fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            max_fov: 85.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntroConfig {
    /// Seconds from the first frame until the scroll phase starts.
    pub duration: f32,
    pub start: Vec3,
    pub end: Vec3,
    pub easing: Easing,
    /// Dust opacity at t = 0; fades to zero with the ease progress.
    pub dust_opacity: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration: 6.5,
            start: Vec3::new(0.0, 150.0, 1800.0),
            end: Vec3::new(0.0, 40.0, 100.0),
            easing: Easing::CubicOut,
            dust_opacity: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance beyond which the camera uses `far_follow`.
    pub far_distance: f32,
    pub far_follow: f32,
    pub near_follow: f32,
    pub bob_amplitude: f32,
    /// Angular frequency of the vertical bob (radians per second).
    pub bob_frequency: f32,
    /// Fraction of the look-target gap closed per frame.
    pub look_smoothing: f32,
    /// Fraction of the field-of-view gap closed per frame.
    pub fov_smoothing: f32,
    /// Distance beyond which the field of view widens.
    pub fov_widen_distance: f32,
    /// Degrees of widening per unit of distance.
    pub fov_widen_rate: f32,
    /// Waypoint offset: `k = radius * offset_radius_factor + offset_base`.
    pub offset_radius_factor: f32,
    pub offset_base: f32,
    /// Lateral (x) share of `k`.
    pub offset_lateral: f32,
    /// Height above the planet in planet radii.
    pub offset_height_factor: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            far_distance: 50.0,
            far_follow: 0.06,
            near_follow: 0.03,
            bob_amplitude: 0.02,
            bob_frequency: 0.5,
            look_smoothing: 0.04,
            fov_smoothing: 0.05,
            fov_widen_distance: 20.0,
            fov_widen_rate: 0.15,
            offset_radius_factor: 4.0,
            offset_base: 15.0,
            offset_lateral: 0.8,
            offset_height_factor: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DustConfig {
    pub count: usize,
    /// Depth advance per frame.
    pub step: f32,
    /// Depth a recycled particle re-enters at.
    pub near: f32,
    /// Depth beyond which a particle is recycled.
    pub far: f32,
    /// Extent of the initial scatter: x and y centered, z from 0.
    pub spread: Vec3,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            count: 800,
            step: 2.0,
            near: -500.0,
            far: 2500.0,
            spread: Vec3::new(400.0, 200.0, 2500.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Global multiplier on every planet's angular speed.
    pub speed_scale: f32,
    /// Planet self-rotation per frame (radians).
    pub spin_step: f32,
    /// Cloud shell rotation per frame (radians).
    pub cloud_spin_step: f32,
    /// Satellite pivot rotation per frame (radians, clockwise).
    pub satellite_spin_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            speed_scale: 0.15,
            spin_step: 0.002,
            cloud_spin_step: 0.003,
            satellite_spin_step: 0.02,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Id of the element the canvas is appended to.
    pub container_id: String,
    /// Cap on the device pixel ratio used for the backing store.
    pub max_pixel_ratio: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas-container".to_string(),
            max_pixel_ratio: 2.0,
        }
    }
}

impl ShowConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the animation cannot honour.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !(self.intro.duration > 0.0) {
            return Err(OrreryError::InvalidConfig(format!(
                "intro.duration must be positive, got {}",
                self.intro.duration
            )));
        }
        if !(self.camera.max_fov >= self.camera.fov) {
            return Err(OrreryError::InvalidConfig(format!(
                "camera.max_fov ({}) is below camera.fov ({})",
                self.camera.max_fov, self.camera.fov
            )));
        }
        if !(self.dust.far > self.dust.near) {
            return Err(OrreryError::InvalidConfig(format!(
                "dust.far ({}) must exceed dust.near ({})",
                self.dust.far, self.dust.near
            )));
        }
        if !(self.dust.step > 0.0) {
            return Err(OrreryError::InvalidConfig(format!(
                "dust.step must be positive, got {}",
                self.dust.step
            )));
        }
        if self.dust.count == 0 {
            return Err(OrreryError::InvalidConfig("dust.count must be non-zero".to_string()));
        }
        Ok(())
    }
}
