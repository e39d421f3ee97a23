use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, trace};

use crate::error::{GeometryError, RenderError, Result};
use crate::geometry::Ray;
use crate::math::{Color, Matrix4, Point3, Transform};
use crate::scene::World;

use super::{Canvas, RenderOptions};

/// A pinhole camera looking down its local `-z` axis at a canvas one unit
/// away.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Creates a camera producing `hsize` x `vsize` images.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the field of view is
    /// not in `(0, pi)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Result<Self> {
        if hsize == 0 || vsize == 0 {
            return Err(RenderError::InvalidDimensions {
                width: hsize,
                height: vsize,
            }
            .into());
        }
        if !(field_of_view > 0.0 && field_of_view < std::f64::consts::PI) {
            return Err(
                GeometryError::Degenerate(format!("field of view {field_of_view} is out of range"))
                    .into(),
            );
        }

        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Ok(Self {
            hsize,
            vsize,
            field_of_view,
            transform: Transform::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        })
    }

    /// Returns the camera with `matrix` as its world → camera view transform.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not invertible.
    pub fn with_transform(mut self, matrix: Matrix4) -> Result<Self> {
        self.set_transform(matrix)?;
        Ok(self)
    }

    /// Replaces the view transform.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not invertible.
    pub fn set_transform(&mut self, matrix: Matrix4) -> Result<()> {
        self.transform = Transform::new(matrix)?;
        Ok(())
    }

    /// Horizontal size in pixels.
    #[must_use]
    pub fn hsize(&self) -> usize {
        self.hsize
    }

    /// Vertical size in pixels.
    #[must_use]
    pub fn vsize(&self) -> usize {
        self.vsize
    }

    /// Field of view in radians.
    #[must_use]
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// The view transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-space size of one pixel on the canvas.
    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The world-space ray through the center of pixel `(px, py)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let inverse = self.transform.inverse();
        let pixel = inverse.transform_point(&Point3::new(world_x, world_y, -1.0));
        let origin = inverse.transform_point(&Point3::origin());
        Ray::new(origin, (pixel - origin).normalize())
    }

    /// Renders `world` with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if shading any pixel fails.
    pub fn render(&self, world: &World) -> Result<Canvas> {
        self.render_with(world, &RenderOptions::default())
    }

    /// Renders `world`, one ray per pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if shading any pixel fails.
    pub fn render_with(&self, world: &World, options: &RenderOptions) -> Result<Canvas> {
        info!(
            width = self.hsize,
            height = self.vsize,
            max_depth = options.max_depth,
            parallel = options.parallel,
            "render started"
        );
        let started = Instant::now();

        let rows: Vec<Vec<Color>> = if options.parallel {
            (0..self.vsize)
                .into_par_iter()
                .map(|y| self.render_row(world, y, options.max_depth))
                .collect::<Result<_>>()?
        } else {
            (0..self.vsize)
                .map(|y| self.render_row(world, y, options.max_depth))
                .collect::<Result<_>>()?
        };

        let mut canvas = Canvas::new(self.hsize, self.vsize)?;
        for (y, row) in rows.into_iter().enumerate() {
            for (x, color) in row.into_iter().enumerate() {
                canvas.write_pixel(x, y, color)?;
            }
        }

        info!(elapsed_ms = started.elapsed().as_millis(), "render finished");
        Ok(canvas)
    }

    fn render_row(&self, world: &World, y: usize, max_depth: usize) -> Result<Vec<Color>> {
        let row = (0..self.hsize)
            .map(|x| world.color_at(&self.ray_for_pixel(x, y), max_depth))
            .collect::<Result<Vec<_>>>()?;
        trace!(row = y, "row traced");
        Ok(row)
    }
}
