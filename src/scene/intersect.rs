use crate::geometry::Ray;

use super::{CsgOperation, Intersection, Intersections, ShapeId, ShapeKind, World};

impl World {
    /// Intersects a world-space ray with every shape in the scene.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Intersections {
        let mut hits = Vec::new();
        for &id in &self.objects {
            self.collect_hits(id, ray, &mut hits);
        }
        Intersections::new(hits)
    }

    /// Intersects a ray, given in the parent space of `id`, with that shape
    /// and everything below it.
    #[must_use]
    pub fn intersect_shape(&self, id: ShapeId, ray: &Ray) -> Intersections {
        let mut hits = Vec::new();
        self.collect_hits(id, ray, &mut hits);
        Intersections::new(hits)
    }

    /// Appends unsorted hits on `id` to `hits`.
    fn collect_hits(&self, id: ShapeId, ray: &Ray, hits: &mut Vec<Intersection>) {
        let Some(shape) = self.shapes.get(id) else {
            return;
        };
        let local_ray = shape.transform.to_local_ray(ray);

        match &shape.kind {
            ShapeKind::Primitive(primitive) => hits.extend(
                primitive
                    .local_intersect(&local_ray)
                    .into_iter()
                    .map(|hit| Intersection::from_local(hit, id)),
            ),
            ShapeKind::Group { children, bounds } => {
                if !bounds.intersects(&local_ray) {
                    return;
                }
                for &child in children {
                    self.collect_hits(child, &local_ray, hits);
                }
            }
            ShapeKind::Csg {
                operation,
                left,
                right,
                bounds,
            } => {
                if !bounds.intersects(&local_ray) {
                    return;
                }
                let mut operand_hits = Vec::new();
                self.collect_hits(*left, &local_ray, &mut operand_hits);
                self.collect_hits(*right, &local_ray, &mut operand_hits);
                let sorted = Intersections::new(operand_hits);
                hits.extend(self.filter_csg(*operation, *left, sorted));
            }
        }
    }

    /// Keeps the hits on a CSG node's surface.
    ///
    /// `hits` must be sorted; a hit counts as "left" when it lies anywhere
    /// beneath the left operand.
    pub(crate) fn filter_csg(
        &self,
        operation: CsgOperation,
        left: ShapeId,
        hits: Intersections,
    ) -> Vec<Intersection> {
        let mut in_left = false;
        let mut in_right = false;
        let mut kept = Vec::new();

        for hit in hits {
            let left_hit = self.is_within(hit.object, left);
            if operation.intersection_allowed(left_hit, in_left, in_right) {
                kept.push(hit);
            }
            if left_hit {
                in_left = !in_left;
            } else {
                in_right = !in_right;
            }
        }
        kept
    }
}
