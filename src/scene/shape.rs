use crate::error::Result;
use crate::geometry::{BoundingBox, Cone, Cube, Cylinder, Plane, Primitive, Sphere};
use crate::math::{Matrix4, Transform};
use crate::shading::Material;

use super::csg::CsgOperation;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the world.
    pub struct ShapeId;
}

/// What a shape is made of.
#[derive(Debug)]
pub enum ShapeKind {
    /// A single surface.
    Primitive(Box<dyn Primitive>),
    /// An ordered collection of child shapes with cached bounds.
    Group {
        /// Child shapes, in insertion order.
        children: Vec<ShapeId>,
        /// Union of the children's bounds in group space.
        bounds: BoundingBox,
    },
    /// A boolean combination of two shapes.
    Csg {
        /// How the operands combine.
        operation: CsgOperation,
        /// Left operand.
        left: ShapeId,
        /// Right operand.
        right: ShapeId,
        /// Union of both operands' bounds in CSG space.
        bounds: BoundingBox,
    },
}

/// A node in the scene: geometry, placement and surface.
///
/// Groups and CSG nodes are created through the
/// [`World`](super::World), which keeps their cached bounds current.
#[derive(Debug)]
pub struct Shape {
    pub(crate) kind: ShapeKind,
    pub(crate) transform: Transform,
    /// Surface material.
    pub material: Material,
    pub(crate) parent: Option<ShapeId>,
}

impl Shape {
    /// Wraps a primitive with the identity transform and default material.
    #[must_use]
    pub fn new(primitive: impl Primitive + 'static) -> Self {
        Self::with_kind(ShapeKind::Primitive(Box::new(primitive)))
    }

    pub(crate) fn with_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            transform: Transform::identity(),
            material: Material::default(),
            parent: None,
        }
    }

    /// A unit sphere.
    #[must_use]
    pub fn sphere() -> Self {
        Self::new(Sphere::new())
    }

    /// A unit sphere with a glass material.
    #[must_use]
    pub fn glass_sphere() -> Self {
        Self::sphere().with_material(Material::glass())
    }

    /// The xz plane.
    #[must_use]
    pub fn plane() -> Self {
        Self::new(Plane::new())
    }

    /// The unit cube.
    #[must_use]
    pub fn cube() -> Self {
        Self::new(Cube::new())
    }

    /// An infinite open cylinder.
    #[must_use]
    pub fn cylinder() -> Self {
        Self::new(Cylinder::default())
    }

    /// An infinite open double cone.
    #[must_use]
    pub fn cone() -> Self {
        Self::new(Cone::default())
    }

    /// Returns the shape with `matrix` as its object → parent transform.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not invertible.
    pub fn with_transform(mut self, matrix: Matrix4) -> Result<Self> {
        self.transform = Transform::new(matrix)?;
        Ok(self)
    }

    /// Returns the shape with `material`.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// The shape's kind.
    #[must_use]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The object → parent transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The enclosing group or CSG node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    /// Returns `true` for groups.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ShapeKind::Group { .. })
    }

    /// Bounds in the shape's own object space.
    #[must_use]
    pub fn local_bounds(&self) -> BoundingBox {
        match &self.kind {
            ShapeKind::Primitive(primitive) => primitive.bounds(),
            ShapeKind::Group { bounds, .. } | ShapeKind::Csg { bounds, .. } => *bounds,
        }
    }

    /// Bounds in the parent's space.
    #[must_use]
    pub fn parent_space_bounds(&self) -> BoundingBox {
        self.transform.bounds_to_parent(&self.local_bounds())
    }
}
