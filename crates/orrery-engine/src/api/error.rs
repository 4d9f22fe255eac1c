//! Error types for the engine crate.

/// Errors surfaced while configuring the show or exporting its scene.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    /// The config JSON did not parse.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The config parsed but holds values the animation cannot work with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The scene manifest could not be serialized for the host.
    #[error("failed to serialize scene manifest: {0}")]
    ManifestSerialize(#[source] serde_json::Error),
}
