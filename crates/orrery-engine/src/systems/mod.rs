pub mod director;
pub mod dust;
pub mod lighting;
pub mod motion;
pub mod overlay;
pub mod render;
