use thiserror::Error;

/// Top-level error type for the Lumen ray tracer.
#[derive(Debug, Error)]
pub enum LumenError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("matrix is not invertible (determinant = {determinant})")]
    NonInvertible { determinant: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to building or querying a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("shape not found in world")]
    ShapeNotFound,

    #[error("shape is not a group")]
    NotAGroup,

    #[error("shape has no surface of its own")]
    NotASurface,

    #[error("shape is already attached to a parent or to the world")]
    AlreadyAttached,

    #[error("attaching the shape would create a cycle")]
    CycleDetected,
}

/// Errors related to rendering and the image buffer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} canvas")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Convenience type alias for results using [`LumenError`].
pub type Result<T> = std::result::Result<T, LumenError>;
