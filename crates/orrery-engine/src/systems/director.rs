//! Camera state machine.
//!
//! `Intro` flies the camera from far out to the overview position on an
//! eased curve. The first frame at or past the intro duration switches to
//! `Scroll` and reports `Transition::IntroComplete`, exactly once. From
//! then on the page scroll picks a waypoint and the camera is smoothed
//! toward it every frame.

use glam::Vec3;
use serde::Serialize;

use crate::api::config::{CameraConfig, IntroConfig, ScrollConfig, ShowConfig};
use crate::extensions::easing::{approach, lerp_vec3};
use crate::renderer::camera::PerspectiveCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Intro,
    Scroll,
}

/// One-shot state changes the caller must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The fly-in finished: reveal the interface and unlock scrolling.
    IntroComplete,
}

/// Raw document scroll measurements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }

    pub fn fraction(&self) -> f32 {
        scroll_fraction(self.scroll_top, self.scroll_height, self.client_height)
    }
}

/// Scroll progress in [0, 1]. A page that cannot scroll (zero, negative or
/// non-finite scrollable height) reads as the top.
pub fn scroll_fraction(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let range = scroll_height - client_height;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    let fraction = scroll_top / range;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Segment for a scroll fraction: 0 is the overview, `i > 0` frames planet
/// `i - 1`. Always in `[0, planet_count]`.
pub fn segment_index(fraction: f32, planet_count: usize) -> usize {
    let segments = planet_count + 1;
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    ((fraction * segments as f32).floor() as usize).min(segments - 1)
}

/// Intro camera position and ease progress at time `t`.
pub fn intro_position(t: f32, intro: &IntroConfig) -> (Vec3, f32) {
    let ease = intro.easing.apply(t / intro.duration);
    (lerp_vec3(intro.start, intro.end, ease), ease)
}

/// Where a planet is this frame and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub position: Vec3,
    pub radius: f32,
}

/// Camera destination for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: Vec3,
    pub look: Vec3,
}

/// Segment 0 returns to the overview looking at the sun. A planet segment
/// sits up and to the side of the planet, farther out for bigger planets.
pub fn segment_waypoint(segment: usize, focus: &[FocusTarget], overview: Vec3, scroll: &ScrollConfig) -> Waypoint {
    let Some(target) = segment.checked_sub(1).and_then(|i| focus.get(i)) else {
        return Waypoint { position: overview, look: Vec3::ZERO };
    };
    let k = target.radius * scroll.offset_radius_factor + scroll.offset_base;
    let offset = Vec3::new(k * scroll.offset_lateral, target.radius * scroll.offset_height_factor, k);
    Waypoint { position: target.position + offset, look: target.position }
}

/// Share of the remaining distance covered this frame.
pub fn follow_factor(distance: f32, scroll: &ScrollConfig) -> f32 {
    if distance > scroll.far_distance {
        scroll.far_follow
    } else {
        scroll.near_follow
    }
}

/// Field of view to drift toward: wider while far from the waypoint,
/// never past `max_fov`.
pub fn target_fov(distance: f32, camera: &CameraConfig, scroll: &ScrollConfig) -> f32 {
    if distance > scroll.fov_widen_distance {
        (camera.fov + distance * scroll.fov_widen_rate).min(camera.max_fov)
    } else {
        camera.fov
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraDirector {
    phase: Phase,
    /// Smoothed look target.
    look: Vec3,
    segment: Option<usize>,
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraDirector {
    pub fn new() -> Self {
        Self { phase: Phase::Intro, look: Vec3::ZERO, segment: None }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Segment picked on the last scroll-phase frame.
    pub fn segment(&self) -> Option<usize> {
        self.segment
    }

    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Advance the state machine. `Scroll` is terminal.
    pub fn update_phase(&mut self, t: f32, intro_duration: f32) -> Option<Transition> {
        match self.phase {
            Phase::Intro if t >= intro_duration => {
                self.phase = Phase::Scroll;
                log::info!("intro complete at t={t:.2}s");
                Some(Transition::IntroComplete)
            }
            _ => None,
        }
    }

    /// Place the camera on the intro curve. Returns the ease progress.
    pub fn intro(&mut self, camera: &mut PerspectiveCamera, t: f32, intro: &IntroConfig) -> f32 {
        let (position, ease) = intro_position(t, intro);
        camera.position = position;
        camera.look_at(Vec3::ZERO);
        ease
    }

    /// Smooth the camera toward the waypoint of the current scroll segment.
    /// Segment 0 returns to the end of the intro curve. Returns the segment.
    pub fn follow(
        &mut self,
        camera: &mut PerspectiveCamera,
        t: f32,
        fraction: f32,
        focus: &[FocusTarget],
        config: &ShowConfig,
    ) -> usize {
        let scroll = &config.scroll;
        let segment = segment_index(fraction, focus.len());
        if self.segment != Some(segment) {
            log::debug!("scroll segment {segment} (fraction {fraction:.3})");
            self.segment = Some(segment);
        }

        let waypoint = segment_waypoint(segment, focus, config.intro.end, scroll);
        let distance = camera.position.distance(waypoint.position);

        camera.position = lerp_vec3(camera.position, waypoint.position, follow_factor(distance, scroll));
        camera.position.y += (t * scroll.bob_frequency).sin() * scroll.bob_amplitude;

        camera.fov = approach(camera.fov, target_fov(distance, &config.camera, scroll), scroll.fov_smoothing);

        self.look = lerp_vec3(self.look, waypoint.look, scroll.look_smoothing);
        camera.look_at(self.look);
        segment
    }
}
