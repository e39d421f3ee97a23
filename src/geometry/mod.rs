pub mod bounds;
pub mod primitive;
pub mod ray;

pub use bounds::BoundingBox;
pub use primitive::{
    Cone, Cube, Cylinder, LocalHit, Plane, Primitive, SmoothTriangle, Sphere, Triangle,
};
pub use ray::Ray;
