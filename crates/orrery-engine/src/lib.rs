pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod assets;
pub mod extensions;
pub mod factory;
pub mod bodies;

// Re-export key types at crate root for convenience
pub use api::config::{ShowConfig, CameraConfig, IntroConfig, ScrollConfig, DustConfig, OrbitConfig, SurfaceConfig};
pub use api::error::OrreryError;
pub use api::show::{SolarShow, FrameReport, DEFAULT_SEED};
pub use api::stage::{Stage, Fog, RendererSettings};
pub use api::types::{NodeId, TextureId, Color};
pub use assets::manifest::SceneManifest;
pub use assets::textures::{TextureLoader, TextureQueue};
pub use bodies::{PlanetDescriptor, PLANETS, PLANET_COUNT};
pub use bridge::protocol::{ProtocolLayout, pack_frame};
pub use components::geometry::{Geometry, RingGeometry, PointCloud, radial_ring_uv};
pub use components::material::{Material, Shading, BlendMode, Side};
pub use components::node::{Node, Transform, Visual};
pub use core::rng::Rng;
pub use core::scene::SceneGraph;
pub use core::time::AnimationClock;
pub use renderer::camera::PerspectiveCamera;
pub use renderer::instance::{NodeInstance, CameraInstance};
pub use renderer::traits::{Renderer, FrameData, Viewport};
pub use systems::director::{CameraDirector, Phase, Transition, ScrollMetrics, scroll_fraction, segment_index};
pub use systems::lighting::{Light, LightRig};
pub use systems::overlay::Overlay;

pub use extensions::{Easing, lerp, lerp_vec3, approach};
