//! Shared scenes and instrumented shapes for tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::geometry::{BoundingBox, LocalHit, Primitive, Ray};
use crate::math::{scaling, Color, Point3, Vector3};
use crate::shading::{Material, PointLight};

use super::{Shape, ShapeId, World};

/// Two concentric spheres lit from `(-10, 10, -10)`.
///
/// The outer unit sphere is `(0.8, 1.0, 0.6)` with diffuse 0.7 and
/// specular 0.2; the inner one is scaled by one half.
pub(crate) fn default_world() -> World {
    default_world_with_ids().0
}

/// [`default_world`] plus the ids of the outer and inner spheres.
pub(crate) fn default_world_with_ids() -> (World, ShapeId, ShapeId) {
    let mut world = World::new();
    world.set_light(PointLight::new(
        Point3::new(-10.0, 10.0, -10.0),
        Color::white(),
    ));
    let outer = world.add(Shape::sphere().with_material(Material {
        color: Color::new(0.8, 1.0, 0.6),
        diffuse: 0.7,
        specular: 0.2,
        ..Material::default()
    }));
    let inner = world.add(Shape::sphere().with_transform(scaling(0.5, 0.5, 0.5)).unwrap());
    (world, outer, inner)
}

/// A unit-cube-bounded primitive that counts intersection queries and
/// remembers the last ray it saw.
#[derive(Debug, Clone, Default)]
pub(crate) struct Probe {
    calls: Arc<AtomicUsize>,
    last_ray: Arc<std::sync::Mutex<Option<Ray>>>,
}

impl Probe {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_ray(&self) -> Option<Ray> {
        *self.last_ray.lock().unwrap()
    }
}

impl Primitive for Probe {
    fn local_intersect(&self, ray: &Ray) -> Vec<LocalHit> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ray.lock().unwrap() = Some(*ray);
        Vec::new()
    }

    fn local_normal_at(&self, point: &Point3, _uv: Option<(f64, f64)>) -> Vector3 {
        point - Point3::origin()
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }
}
