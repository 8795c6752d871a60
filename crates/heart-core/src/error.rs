use thiserror::Error;

/// Why the heart model could not be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF document has no scene")]
    NoScene,
    #[error("primitive has no POSITION attribute")]
    MissingPositions,
    #[error("model contains no triangles")]
    NoTriangles,
}
