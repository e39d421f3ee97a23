pub mod camera;
pub mod canvas;

pub use camera::Camera;
pub use canvas::Canvas;

/// Default bounce budget for reflection and refraction rays.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Knobs for [`Camera::render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Reflection/refraction bounces allowed per primary ray.
    pub max_depth: usize,
    /// Trace rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: true,
        }
    }
}
