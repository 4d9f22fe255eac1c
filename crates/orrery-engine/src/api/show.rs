//! The show: scene, clock and camera director behind one per-frame call.

use glam::{Mat4, Vec3};

use crate::api::config::ShowConfig;
use crate::api::error::OrreryError;
use crate::api::stage::Stage;
use crate::api::types::NodeId;
use crate::assets::manifest::{ManifestSources, SceneManifest};
use crate::assets::textures::TextureQueue;
use crate::bodies::{overlay_ids, PlanetDescriptor, PLANETS};
use crate::core::rng::Rng;
use crate::core::scene::SceneGraph;
use crate::core::time::AnimationClock;
use crate::factory::{create_planets, create_stardust, create_stars, create_sun, PlanetSystem, StarField, SunNodes};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::NodeInstance;
use crate::renderer::traits::{FrameData, Renderer, Viewport};
use crate::systems::director::{CameraDirector, FocusTarget, Phase, ScrollMetrics, Transition};
use crate::systems::dust::advance_dust;
use crate::systems::motion::{animate_planets, animate_stars, animate_sun};
use crate::systems::overlay::{reveal_interface, sync_overlay, Overlay};
use crate::systems::render::build_node_instances;

/// Seed used when the config does not pin one.
pub const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub elapsed: f32,
    pub phase: Phase,
    /// Scroll segment, `None` during the intro.
    pub segment: Option<usize>,
    pub transition: Option<Transition>,
}

pub struct SolarShow {
    config: ShowConfig,
    stage: Stage,
    graph: SceneGraph,
    textures: TextureQueue,
    descriptors: Vec<PlanetDescriptor>,
    sun: SunNodes,
    stars: StarField,
    dust: NodeId,
    planets: PlanetSystem,
    director: CameraDirector,
    clock: AnimationClock,
    overlay_ids: Vec<String>,
    // Per-frame scratch, reused.
    world: Vec<Mat4>,
    instances: Vec<NodeInstance>,
    focus: Vec<FocusTarget>,
    frame: u64,
}

impl SolarShow {
    /// Validate the config and build the whole scene.
    pub fn new(config: ShowConfig, viewport: Viewport) -> Result<Self, OrreryError> {
        Self::with_planets(config, viewport, &PLANETS)
    }

    pub fn with_planets(
        config: ShowConfig,
        viewport: Viewport,
        descriptors: &[PlanetDescriptor],
    ) -> Result<Self, OrreryError> {
        config.validate()?;

        let mut rng = Rng::new(config.seed.unwrap_or(DEFAULT_SEED));
        let mut graph = SceneGraph::with_capacity(16 + descriptors.len() * 8);
        let mut textures = TextureQueue::new();
        let root = graph.root();

        let sun = create_sun(&mut graph, root, &mut textures);
        let stars = create_stars(&mut graph, root, &mut rng);
        let dust = create_stardust(&mut graph, root, &mut rng, &config.dust);
        let planets = create_planets(&mut graph, root, &mut textures, &mut rng, descriptors);

        let stage = Stage::new(&config, viewport);
        let node_count = graph.node_count();
        log::info!(
            "scene built: {} nodes, {} planets, {} textures queued",
            node_count,
            planets.len(),
            textures.len()
        );

        Ok(Self {
            overlay_ids: overlay_ids(descriptors),
            descriptors: descriptors.to_vec(),
            config,
            stage,
            graph,
            textures,
            sun,
            stars,
            dust,
            planets,
            director: CameraDirector::new(),
            clock: AnimationClock::new(),
            world: Vec::with_capacity(node_count),
            instances: Vec::with_capacity(node_count),
            focus: Vec::with_capacity(descriptors.len()),
            frame: 0,
        })
    }

    /// Run one frame at host time `now_secs` and hand it to `renderer`.
    pub fn frame(
        &mut self,
        now_secs: f64,
        scroll: ScrollMetrics,
        overlay: &mut dyn Overlay,
        renderer: &mut dyn Renderer,
    ) -> FrameReport {
        let t = self.clock.sample(now_secs);

        animate_sun(&mut self.graph, &self.sun, t);
        animate_stars(&mut self.graph, &self.stars, t);
        self.recycle_dust();
        animate_planets(&mut self.graph, &mut self.planets, &self.descriptors, t, &self.config.orbit);

        let transition = self.director.update_phase(t, self.config.intro.duration);
        if let Some(Transition::IntroComplete) = transition {
            reveal_interface(overlay);
            self.set_dust_opacity(0.0);
        }

        let segment = match self.director.phase() {
            Phase::Intro => {
                let ease = self.director.intro(&mut self.stage.camera, t, &self.config.intro);
                self.set_dust_opacity(self.config.intro.dust_opacity * (1.0 - ease));
                None
            }
            Phase::Scroll => {
                self.collect_focus();
                let segment = self.director.follow(
                    &mut self.stage.camera,
                    t,
                    scroll.fraction(),
                    &self.focus,
                    &self.config,
                );
                sync_overlay(overlay, &self.overlay_ids, segment);
                Some(segment)
            }
        };

        self.frame += 1;
        build_node_instances(&self.graph, &mut self.world, &mut self.instances);
        let phase = self.director.phase();
        renderer.draw(&FrameData {
            frame: self.frame,
            elapsed: t,
            phase,
            segment,
            camera: self.stage.camera.instance(),
            instances: &self.instances,
            dust: self.dust_positions(),
            dust_node: self.dust,
            viewport: self.stage.viewport(),
        });

        FrameReport { frame: self.frame, elapsed: t, phase, segment, transition }
    }

    /// Adopt a new surface size and forward it to the renderer.
    pub fn resize(&mut self, viewport: Viewport, renderer: &mut dyn Renderer) -> Viewport {
        let viewport = self.stage.resize(viewport);
        log::debug!("resize to {}x{} @{}", viewport.width, viewport.height, viewport.pixel_ratio);
        renderer.resize(viewport.width.max(0.0) as u32, viewport.height.max(0.0) as u32);
        viewport
    }

    /// One-time scene description for the host.
    pub fn manifest_json(&self) -> Result<String, OrreryError> {
        SceneManifest::new(ManifestSources {
            graph: &self.graph,
            camera: &self.stage.camera,
            fog: self.stage.fog,
            lights: self.stage.lights.as_slice(),
            renderer: &self.stage.renderer,
            textures: &self.textures,
            dust_node: self.dust,
            overlay_ids: &self.overlay_ids,
        })
        .to_json()
    }

    fn recycle_dust(&mut self) {
        let dust = &self.config.dust;
        if let Some(cloud) = self
            .graph
            .get_mut(self.dust)
            .and_then(|n| n.visual.as_mut())
            .and_then(|v| v.geometry.points_mut())
        {
            advance_dust(&mut cloud.positions, dust.step, dust.near, dust.far);
        }
    }

    fn set_dust_opacity(&mut self, opacity: f32) {
        if let Some(material) = self.graph.get_mut(self.dust).and_then(|n| n.material_mut()) {
            material.opacity = opacity;
        }
    }

    fn collect_focus(&mut self) {
        self.focus.clear();
        for (planet, data) in self.planets.planets.iter().zip(&self.descriptors) {
            self.focus.push(FocusTarget {
                position: self.graph.world_position(planet.group),
                radius: data.radius,
            });
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.stage.camera
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn textures(&self) -> &TextureQueue {
        &self.textures
    }

    pub fn sun(&self) -> &SunNodes {
        &self.sun
    }

    pub fn planets(&self) -> &PlanetSystem {
        &self.planets
    }

    pub fn descriptors(&self) -> &[PlanetDescriptor] {
        &self.descriptors
    }

    pub fn overlay_ids(&self) -> &[String] {
        &self.overlay_ids
    }

    pub fn dust_node(&self) -> NodeId {
        self.dust
    }

    pub fn dust_positions(&self) -> &[Vec3] {
        self.graph
            .get(self.dust)
            .and_then(|n| n.visual.as_ref())
            .and_then(|v| v.geometry.points())
            .map(|cloud| cloud.positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn dust_opacity(&self) -> f32 {
        self.graph.get(self.dust).map_or(0.0, |n| n.opacity())
    }

    pub fn phase(&self) -> Phase {
        self.director.phase()
    }

    pub fn is_intro_complete(&self) -> bool {
        self.director.phase() == Phase::Scroll
    }

    pub fn segment(&self) -> Option<usize> {
        self.director.segment()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn dust_count(&self) -> usize {
        self.dust_positions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{NEPTUNE, PLANET_COUNT};
    use crate::renderer::traits::RecordingRenderer;
    use crate::systems::overlay::{RecordingOverlay, SCROLL_INDICATOR_ID, UI_LAYER_ID};

    const T0: f64 = 1000.0;

    fn show() -> SolarShow {
        let config = ShowConfig { seed: Some(1234), ..ShowConfig::default() };
        SolarShow::new(config, Viewport::new(1600.0, 900.0, 1.0)).unwrap()
    }

    fn top() -> ScrollMetrics {
        ScrollMetrics::new(0.0, 10_000.0, 1000.0)
    }

    fn at(fraction: f32) -> ScrollMetrics {
        ScrollMetrics::new(fraction * 9000.0, 10_000.0, 1000.0)
    }

    /// Run frames at 60 Hz from `from` to `to` seconds (inclusive).
    fn run(
        show: &mut SolarShow,
        from: f64,
        to: f64,
        scroll: ScrollMetrics,
        overlay: &mut RecordingOverlay,
        renderer: &mut RecordingRenderer,
    ) -> Vec<FrameReport> {
        let mut reports = Vec::new();
        let mut t = from;
        while t <= to + 1e-9 {
            reports.push(show.frame(T0 + t, scroll, overlay, renderer));
            t += 1.0 / 60.0;
        }
        reports
    }

    #[test]
    fn scene_population() {
        let show = show();
        // root, sun + 2 glows, 3 star layers, dust,
        // 8 × (orbit ring, group, mesh), 2 cloud shells, 1 ring, satellite pivot + body + panel.
        assert_eq!(show.node_count(), 1 + 3 + 3 + 1 + 24 + 2 + 1 + 3);
        assert_eq!(show.dust_count(), 800);
        assert_eq!(show.planets().len(), PLANET_COUNT);
        assert_eq!(show.overlay_ids().len(), PLANET_COUNT + 1);
        assert_eq!(show.phase(), Phase::Intro);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = ShowConfig::default();
        config.intro.duration = 0.0;
        assert!(matches!(
            SolarShow::new(config, Viewport::default()),
            Err(OrreryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn first_frame_starts_the_intro() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        let report = show.frame(T0, top(), &mut overlay, &mut renderer);

        assert_eq!(report.elapsed, 0.0);
        assert_eq!(report.segment, None);
        assert_eq!(show.camera().position, show.config().intro.start);
        assert_eq!(show.camera().target, Vec3::ZERO);
        assert!((show.dust_opacity() - 0.6).abs() < 1e-6);
        assert!(overlay.revealed.is_empty());
        assert_eq!(overlay.set_calls, 0);

        let drawn = renderer.last().unwrap();
        assert_eq!(drawn.frame, 1);
        assert_eq!(drawn.node_count, show.node_count());
        assert_eq!(drawn.dust_count, 800);
    }

    #[test]
    fn intro_lands_at_the_overview_and_transitions_once() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        let end = show.config().intro.end;

        let intro = run(&mut show, 0.0, 6.49, top(), &mut overlay, &mut renderer);
        assert!(intro.iter().all(|r| r.phase == Phase::Intro && r.transition.is_none()));
        assert!(show.camera().position.distance(end) < 0.01);
        assert!(show.dust_opacity() < 1e-3);

        let report = show.frame(T0 + 6.5, top(), &mut overlay, &mut renderer);
        assert_eq!(report.transition, Some(Transition::IntroComplete));
        assert_eq!(report.segment, Some(0));
        assert!(show.camera().position.distance(end) < 0.01);
        assert_eq!(show.dust_opacity(), 0.0);
        assert_eq!(overlay.revealed, vec![UI_LAYER_ID.to_owned(), SCROLL_INDICATOR_ID.to_owned()]);
        assert_eq!(overlay.scroll_unlocks, 1);

        let later = run(&mut show, 6.6, 10.0, top(), &mut overlay, &mut renderer);
        assert!(later.iter().all(|r| r.transition.is_none() && r.phase == Phase::Scroll));
        assert_eq!(overlay.scroll_unlocks, 1);
        assert_eq!(overlay.revealed.len(), 2);
    }

    #[test]
    fn overview_segment_holds_the_overview() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        run(&mut show, 0.0, 10.0, top(), &mut overlay, &mut renderer);

        assert_eq!(show.segment(), Some(0));
        // Bob stays within a fraction of a unit.
        assert!(show.camera().position.distance(show.config().intro.end) < 1.0);
        assert!(show.camera().target.length() < 1e-3);
        assert_eq!(overlay.active.iter().collect::<Vec<_>>(), vec!["info-intro"]);
    }

    #[test]
    fn deep_scroll_heads_for_the_last_planet() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        run(&mut show, 0.0, 6.49, top(), &mut overlay, &mut renderer);

        let start = show.camera().position;
        let report = show.frame(T0 + 10.0, at(0.99), &mut overlay, &mut renderer);
        assert_eq!(report.segment, Some(PLANET_COUNT));
        assert_eq!(overlay.active.iter().collect::<Vec<_>>(), vec!["info-neptune"]);

        let neptune = show.graph().world_position(show.planets().planets[NEPTUNE].group);
        let k = 4.0 * 7.0 + 15.0;
        let waypoint = neptune + Vec3::new(0.8 * k, 14.0, k);
        // Moving toward the waypoint, not snapped onto it.
        assert!(show.camera().position.distance(waypoint) < start.distance(waypoint));
        assert!(show.camera().position.distance(waypoint) > 50.0);
        assert!(show.camera().fov > 60.0 && show.camera().fov <= 85.0);

        run(&mut show, 10.02, 40.0, at(0.99), &mut overlay, &mut renderer);
        let neptune = show.graph().world_position(show.planets().planets[NEPTUNE].group);
        let waypoint = neptune + Vec3::new(0.8 * k, 14.0, k);
        assert!(show.camera().position.distance(waypoint) < 5.0);
        assert!(show.camera().target.distance(neptune) < 5.0);
    }

    #[test]
    fn active_panel_tracks_segment() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        run(&mut show, 0.0, 6.5, top(), &mut overlay, &mut renderer);

        for segment in 0..=PLANET_COUNT {
            let fraction = (segment as f32 + 0.5) / (PLANET_COUNT + 1) as f32;
            let report = show.frame(T0 + 7.0 + segment as f64, at(fraction), &mut overlay, &mut renderer);
            assert_eq!(report.segment, Some(segment));
            assert_eq!(overlay.active.len(), 1);
            assert!(overlay.active.contains(&show.overlay_ids()[segment]));
        }
    }

    #[test]
    fn dust_stays_in_bounds_across_many_frames() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        for i in 0..2000 {
            show.frame(T0 + i as f64 / 60.0, top(), &mut overlay, &mut renderer);
            assert!(show.dust_positions().iter().all(|p| (-500.0..=2500.0).contains(&p.z)));
        }
    }

    #[test]
    fn resize_updates_aspect_and_renderer() {
        let mut show = show();
        let mut renderer = RecordingRenderer::default();
        show.resize(Viewport::new(1200.0, 400.0, 1.0), &mut renderer);
        assert_eq!(show.camera().aspect, 3.0);
        assert_eq!(renderer.resizes, vec![(1200, 400)]);

        show.resize(Viewport::new(1200.0, 0.0, 1.0), &mut renderer);
        assert_eq!(show.camera().aspect, 3.0);
    }

    #[test]
    fn frames_are_counted() {
        let mut show = show();
        let mut overlay = RecordingOverlay::default();
        let mut renderer = RecordingRenderer::default();
        run(&mut show, 0.0, 1.0, top(), &mut overlay, &mut renderer);
        assert_eq!(show.frame_count(), renderer.draws.len() as u64);
        let frames: Vec<_> = renderer.draws.iter().map(|d| d.frame).collect();
        assert!(frames.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn manifest_matches_the_scene() {
        let show = show();
        let json: serde_json::Value = serde_json::from_str(&show.manifest_json().unwrap()).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), show.node_count());
        assert_eq!(json["textures"].as_array().unwrap().len(), show.textures().len());
        assert_eq!(json["dust_node"], show.dust_node().index());
        assert_eq!(json["overlay_ids"][8], "info-neptune");
    }

    #[test]
    fn same_seed_same_orbits() {
        let a = show();
        let b = show();
        assert_eq!(a.planets().orbits, b.planets().orbits);
    }
}
