use thiserror::Error;

/// Malformed scene input, rejected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("light direction must be non-zero")]
    ZeroLightDirection,

    #[error("image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
}
