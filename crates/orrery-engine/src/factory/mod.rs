//! Object factories.
//!
//! Each factory inserts its nodes under a caller-chosen parent and returns a
//! handle struct naming what it built. Texture URLs go through the
//! `TextureLoader` handed in; nothing else leaves the scene graph.

pub mod planets;
pub mod stars;
pub mod sun;

pub use planets::{create_planets, PlanetNodes, PlanetSystem};
pub use stars::{create_stardust, create_stars, StarField, StarLayer};
pub use sun::{create_sun, SunNodes};
