pub mod instance;
pub mod camera;
pub mod traits;

// Re-export key types for convenient access
pub use camera::PerspectiveCamera;
pub use instance::{CameraInstance, NodeInstance};
pub use traits::{FrameData, Renderer, Viewport};

#[cfg(test)]
pub use traits::RecordingRenderer;
