//! The scene graph and everything that traces rays through it.
//!
//! A [`World`] owns every [`Shape`] in a slot-map arena. Groups and CSG nodes
//! refer to their children by [`ShapeId`], and children point back at their
//! parent the same way, so nested coordinate spaces need no shared ownership.

pub mod computations;
pub mod csg;
pub mod intersection;
pub mod shape;

mod intersect;
mod shading;

#[cfg(test)]
pub(crate) mod fixtures;

pub use computations::Computations;
pub use csg::CsgOperation;
pub use intersection::{Intersection, Intersections};
pub use shape::{Shape, ShapeId, ShapeKind};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{Result, SceneError};
use crate::geometry::BoundingBox;
use crate::math::{Matrix4, Point3, Transform, Vector3};
use crate::shading::{Material, PointLight};

/// Central arena that owns all shapes, plus the light.
#[derive(Debug, Default)]
pub struct World {
    shapes: SlotMap<ShapeId, Shape>,
    objects: Vec<ShapeId>,
    light: Option<PointLight>,
}

impl World {
    /// Creates an empty world with no light.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Construction ---

    /// Stores a shape without placing it in the scene.
    ///
    /// The shape becomes visible once attached with [`World::add_object`],
    /// [`World::add_child`] or [`World::insert_csg`].
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = self.shapes.insert(shape);
        debug!(?id, "inserted shape");
        id
    }

    /// Stores a shape at the top level of the scene.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = self.insert(shape);
        self.objects.push(id);
        id
    }

    /// Places a detached shape at the top level of the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or is already attached.
    pub fn add_object(&mut self, id: ShapeId) -> Result<()> {
        self.ensure_detached(id)?;
        self.objects.push(id);
        debug!(?id, "attached shape at top level");
        Ok(())
    }

    /// Stores an empty group without placing it in the scene.
    pub fn insert_group(&mut self) -> ShapeId {
        self.insert(Shape::with_kind(ShapeKind::Group {
            children: Vec::new(),
            bounds: BoundingBox::empty(),
        }))
    }

    /// Stores an empty group at the top level of the scene.
    pub fn add_group(&mut self) -> ShapeId {
        let id = self.insert_group();
        self.objects.push(id);
        id
    }

    /// Appends a detached shape to a group.
    ///
    /// # Errors
    ///
    /// Returns an error if either shape does not exist, `group` is not a
    /// group, `child` is already attached, or `child` contains `group`.
    pub fn add_child(&mut self, group: ShapeId, child: ShapeId) -> Result<()> {
        if !self.shape(group)?.is_group() {
            return Err(SceneError::NotAGroup.into());
        }
        self.ensure_detached(child)?;
        if self.is_within(group, child) {
            return Err(SceneError::CycleDetected.into());
        }

        if let Some(Shape {
            kind: ShapeKind::Group { children, .. },
            ..
        }) = self.shapes.get_mut(group)
        {
            children.push(child);
        }
        self.shape_mut(child)?.parent = Some(group);
        debug!(?group, ?child, "attached child to group");
        self.refresh_bounds(group);
        Ok(())
    }

    /// Combines two detached shapes into a detached CSG node.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand does not exist, is already
    /// attached, or both operands are the same shape.
    pub fn insert_csg(
        &mut self,
        operation: CsgOperation,
        left: ShapeId,
        right: ShapeId,
    ) -> Result<ShapeId> {
        if left == right {
            return Err(SceneError::AlreadyAttached.into());
        }
        self.ensure_detached(left)?;
        self.ensure_detached(right)?;

        let mut bounds = self.shape(left)?.parent_space_bounds();
        bounds.merge(&self.shape(right)?.parent_space_bounds());
        let id = self.insert(Shape::with_kind(ShapeKind::Csg {
            operation,
            left,
            right,
            bounds,
        }));
        self.shape_mut(left)?.parent = Some(id);
        self.shape_mut(right)?.parent = Some(id);
        debug!(?id, ?operation, "built csg node");
        Ok(id)
    }

    /// Replaces a shape's transform, refreshing enclosing bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or `matrix` is not
    /// invertible.
    pub fn set_transform(&mut self, id: ShapeId, matrix: Matrix4) -> Result<()> {
        let transform = Transform::new(matrix)?;
        let shape = self.shape_mut(id)?;
        shape.transform = transform;
        if let Some(parent) = shape.parent {
            self.refresh_bounds(parent);
        }
        Ok(())
    }

    /// Mutable access to a shape's material.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    pub fn material_mut(&mut self, id: ShapeId) -> Result<&mut Material> {
        Ok(&mut self.shape_mut(id)?.material)
    }

    /// Replaces a shape's material.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    pub fn set_material(&mut self, id: ShapeId, material: Material) -> Result<()> {
        self.shape_mut(id)?.material = material;
        Ok(())
    }

    /// Sets the scene's single light.
    pub fn set_light(&mut self, light: PointLight) {
        self.light = Some(light);
    }

    /// Removes the light. Surfaces then receive no direct illumination.
    pub fn remove_light(&mut self) {
        self.light = None;
    }

    // --- Queries ---

    /// The scene's light, if any.
    #[must_use]
    pub fn light(&self) -> Option<&PointLight> {
        self.light.as_ref()
    }

    /// Top-level shapes, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[ShapeId] {
        &self.objects
    }

    /// Returns the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape> {
        self.shapes
            .get(id)
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.shapes
            .get_mut(id)
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    /// Bounds of a shape in its parent's space.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    pub fn parent_space_bounds(&self, id: ShapeId) -> Result<BoundingBox> {
        Ok(self.shape(id)?.parent_space_bounds())
    }

    /// Returns `true` if `id` is `ancestor` or nested anywhere below it.
    #[must_use]
    pub fn is_within(&self, id: ShapeId, ancestor: ShapeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.shapes.get(node).and_then(|s| s.parent);
        }
        false
    }

    // --- Space conversion ---

    /// Maps a world-space point into the object space of `id`, through every
    /// enclosing group.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of its ancestors does not exist.
    pub fn world_to_object(&self, id: ShapeId, point: &Point3) -> Result<Point3> {
        let shape = self.shape(id)?;
        let point = match shape.parent {
            Some(parent) => self.world_to_object(parent, point)?,
            None => *point,
        };
        Ok(shape.transform.to_local_point(&point))
    }

    /// Maps an object-space normal of `id` out to world space, normalizing at
    /// each level.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape or one of its ancestors does not exist.
    pub fn normal_to_world(&self, id: ShapeId, normal: &Vector3) -> Result<Vector3> {
        let shape = self.shape(id)?;
        let normal = shape.transform.normal_to_parent(normal);
        match shape.parent {
            Some(parent) => self.normal_to_world(parent, &normal),
            None => Ok(normal),
        }
    }

    /// World-space surface normal at `point` for the shape hit by `hit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or is a group or CSG node.
    pub fn normal_at(&self, hit: &Intersection, point: &Point3) -> Result<Vector3> {
        let ShapeKind::Primitive(primitive) = &self.shape(hit.object)?.kind else {
            return Err(SceneError::NotASurface.into());
        };
        let local_point = self.world_to_object(hit.object, point)?;
        let local_normal = primitive.local_normal_at(&local_point, hit.uv);
        self.normal_to_world(hit.object, &local_normal)
    }

    // --- Internals ---

    fn ensure_detached(&self, id: ShapeId) -> Result<()> {
        if self.shape(id)?.parent.is_some() || self.objects.contains(&id) {
            return Err(SceneError::AlreadyAttached.into());
        }
        Ok(())
    }

    /// Recomputes cached bounds of `id` and every ancestor.
    fn refresh_bounds(&mut self, id: ShapeId) {
        let mut current = Some(id);
        while let Some(node) = current {
            let Some(shape) = self.shapes.get(node) else {
                break;
            };
            let bounds = match &shape.kind {
                ShapeKind::Primitive(_) => None,
                ShapeKind::Group { children, .. } => {
                    let mut bounds = BoundingBox::empty();
                    for child in children {
                        if let Some(child) = self.shapes.get(*child) {
                            bounds.merge(&child.parent_space_bounds());
                        }
                    }
                    Some(bounds)
                }
                ShapeKind::Csg { left, right, .. } => {
                    let mut bounds = BoundingBox::empty();
                    for operand in [left, right] {
                        if let Some(operand) = self.shapes.get(*operand) {
                            bounds.merge(&operand.parent_space_bounds());
                        }
                    }
                    Some(bounds)
                }
            };
            current = shape.parent;

            if let (Some(fresh), Some(shape)) = (bounds, self.shapes.get_mut(node)) {
                match &mut shape.kind {
                    ShapeKind::Group { bounds, .. } | ShapeKind::Csg { bounds, .. } => {
                        *bounds = fresh;
                    }
                    ShapeKind::Primitive(_) => {}
                }
                debug!(id = ?node, "refreshed bounds");
            }
        }
    }
}
