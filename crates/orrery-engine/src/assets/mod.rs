pub mod manifest;
pub mod textures;

pub use manifest::{ManifestSources, SceneManifest};
pub use textures::{TextureLoader, TextureQueue};
