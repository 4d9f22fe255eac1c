// extensions/mod.rs
//
// Math extensions shared by the animation systems.
// Decoupled from the scene graph: plain functions over glam types.

pub mod easing;

pub use easing::{Easing, lerp, lerp_vec3, approach};
