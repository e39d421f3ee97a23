use crate::error::Result;
use crate::geometry::Ray;
use crate::math::{reflect, Point3, Vector3, EPSILON};
use crate::shading::VACUUM;

use super::{Intersection, Intersections, ShapeId, World};

/// Shading context for one intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computations {
    /// Distance along the ray.
    pub t: f64,
    /// The shape that was hit.
    pub object: ShapeId,
    /// World-space hit point.
    pub point: Point3,
    /// Hit point nudged off the surface along the normal.
    pub over_point: Point3,
    /// Hit point nudged into the surface against the normal.
    pub under_point: Point3,
    /// Direction back toward the ray origin.
    pub eyev: Vector3,
    /// Surface normal, flipped to face the eye.
    pub normalv: Vector3,
    /// Ray direction reflected about the normal.
    pub reflectv: Vector3,
    /// Whether the ray started inside the shape.
    pub inside: bool,
    /// Refractive index of the medium being left.
    pub n1: f64,
    /// Refractive index of the medium being entered.
    pub n2: f64,
}

impl Intersection {
    /// Builds the shading context for this intersection.
    ///
    /// `intersections` is the full sorted list this hit came from; it drives
    /// the refractive indices on either side of the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the hit shape is not a surface in `world`.
    pub fn prepare_computations(
        &self,
        ray: &Ray,
        intersections: &Intersections,
        world: &World,
    ) -> Result<Computations> {
        let point = ray.position(self.t);
        let eyev = -ray.direction;
        let mut normalv = world.normal_at(self, &point)?;
        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }
        let (n1, n2) = refractive_indices(self, intersections, world)?;

        Ok(Computations {
            t: self.t,
            object: self.object,
            point,
            over_point: point + normalv * EPSILON,
            under_point: point - normalv * EPSILON,
            eyev,
            normalv,
            reflectv: reflect(&ray.direction, &normalv),
            inside,
            n1,
            n2,
        })
    }
}

/// Walks the sorted hits up to `hit`, tracking which shapes the ray is inside.
///
/// `hit` is located by address when it borrows from `intersections`, so equal
/// copies (tangent roots) resolve to the right entry. A detached copy falls
/// back to the first equal entry.
fn refractive_indices(
    hit: &Intersection,
    intersections: &Intersections,
    world: &World,
) -> Result<(f64, f64)> {
    let index_of = |containers: &[ShapeId]| -> Result<f64> {
        match containers.last() {
            Some(&id) => Ok(world.shape(id)?.material.refractive_index),
            None => Ok(VACUUM),
        }
    };

    let Some(target) = intersections
        .iter()
        .position(|candidate| std::ptr::eq(candidate, hit))
        .or_else(|| intersections.iter().position(|candidate| candidate == hit))
    else {
        return Ok((VACUUM, VACUUM));
    };

    let mut containers: Vec<ShapeId> = Vec::new();
    for candidate in &intersections[..target] {
        toggle(&mut containers, candidate.object);
    }
    let n1 = index_of(&containers)?;
    toggle(&mut containers, hit.object);
    Ok((n1, index_of(&containers)?))
}

/// Leaves `object` if the ray is inside it, otherwise enters it.
fn toggle(containers: &mut Vec<ShapeId>, object: ShapeId) {
    if let Some(pos) = containers.iter().position(|&id| id == object) {
        containers.remove(pos);
    } else {
        containers.push(object);
    }
}

impl Computations {
    /// Fraction of light reflected at this surface, by Schlick's
    /// approximation of the Fresnel equations.
    #[must_use]
    pub fn schlick(&self) -> f64 {
        let mut cos = self.eyev.dot(&self.normalv);
        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }
        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}
