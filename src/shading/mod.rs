pub mod light;
pub mod material;
pub mod pattern;

pub use light::PointLight;
pub use material::{Material, AIR, DIAMOND, GLASS, VACUUM, WATER};
pub use pattern::{Pattern, PatternKind};
