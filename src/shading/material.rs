use std::sync::Arc;

use crate::math::{reflect, Color, Point3, Vector3};

use super::{Pattern, PointLight};

/// Refractive index of a vacuum.
pub const VACUUM: f64 = 1.0;
/// Refractive index of air.
pub const AIR: f64 = 1.000_29;
/// Refractive index of water.
pub const WATER: f64 = 1.333;
/// Refractive index of glass.
pub const GLASS: f64 = 1.5;
/// Refractive index of diamond.
pub const DIAMOND: f64 = 2.417;

/// Phong surface parameters plus reflection and refraction coefficients.
///
/// Cloning a material copies every scalar but aliases the pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Flat surface color, used when no pattern is set.
    pub color: Color,
    /// Ambient reflection coefficient.
    pub ambient: f64,
    /// Diffuse reflection coefficient.
    pub diffuse: f64,
    /// Specular reflection coefficient.
    pub specular: f64,
    /// Specular highlight exponent.
    pub shininess: f64,
    /// Mirror reflectance in `[0, 1]`.
    pub reflective: f64,
    /// Transparency in `[0, 1]`.
    pub transparency: f64,
    /// Refractive index of the medium inside the surface.
    pub refractive_index: f64,
    /// Optional pattern, replacing `color`.
    pub pattern: Option<Arc<Pattern>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: VACUUM,
            pattern: None,
        }
    }
}

impl Material {
    /// Fully transparent glass.
    #[must_use]
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: GLASS,
            ..Self::default()
        }
    }

    /// Surface color at `object_point`, from the pattern if one is set.
    #[must_use]
    pub fn color_at(&self, object_point: &Point3) -> Color {
        match &self.pattern {
            Some(pattern) => pattern.pattern_at_object(object_point),
            None => self.color,
        }
    }

    /// Phong lighting at `point` as seen along `eye`.
    ///
    /// `object_point` is `point` in the shaded object's space and only
    /// drives pattern lookup. In shadow, only the ambient term remains.
    #[must_use]
    pub fn lighting(
        &self,
        object_point: &Point3,
        light: &PointLight,
        point: &Point3,
        eye: &Vector3,
        normal: &Vector3,
        in_shadow: bool,
    ) -> Color {
        let effective_color = self.color_at(object_point) * light.intensity;
        let ambient = effective_color * self.ambient;
        if in_shadow {
            return ambient;
        }

        let light_v = (light.position - point).normalize();
        let light_dot_normal = light_v.dot(normal);
        if light_dot_normal < 0.0 {
            return ambient;
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;
        let reflect_dot_eye = reflect(&-light_v, normal).dot(eye);
        let specular = if reflect_dot_eye <= 0.0 {
            Color::black()
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn light_at(x: f64, y: f64, z: f64) -> PointLight {
        PointLight::new(Point3::new(x, y, z), Color::white())
    }

    fn shade(eye: Vector3, light: &PointLight, in_shadow: bool) -> Color {
        let position = Point3::origin();
        Material::default().lighting(
            &position,
            light,
            &position,
            &eye,
            &Vector3::new(0.0, 0.0, -1.0),
            in_shadow,
        )
    }

    #[test]
    fn default_material() {
        let m = Material::default();
        assert_eq!(m.color, Color::white());
        assert_abs_diff_eq!(m.ambient, 0.1);
        assert_abs_diff_eq!(m.diffuse, 0.9);
        assert_abs_diff_eq!(m.specular, 0.9);
        assert_abs_diff_eq!(m.shininess, 200.0);
        assert_abs_diff_eq!(m.reflective, 0.0);
        assert_abs_diff_eq!(m.transparency, 0.0);
        assert_abs_diff_eq!(m.refractive_index, 1.0);
        assert!(m.pattern.is_none());
    }

    #[test]
    fn glass_preset() {
        let g = Material::glass();
        assert_abs_diff_eq!(g.transparency, 1.0);
        assert_abs_diff_eq!(g.refractive_index, GLASS);
    }

    #[test]
    fn eye_between_light_and_surface() {
        let c = shade(Vector3::new(0.0, 0.0, -1.0), &light_at(0.0, 0.0, -10.0), false);
        assert_abs_diff_eq!(c, Color::new(1.9, 1.9, 1.9));
    }

    #[test]
    fn eye_offset_45_degrees() {
        let eye = Vector3::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let c = shade(eye, &light_at(0.0, 0.0, -10.0), false);
        assert_abs_diff_eq!(c, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn light_offset_45_degrees() {
        let c = shade(Vector3::new(0.0, 0.0, -1.0), &light_at(0.0, 10.0, -10.0), false);
        assert_abs_diff_eq!(c, Color::new(0.7364, 0.7364, 0.7364), epsilon = 1e-4);
    }

    #[test]
    fn eye_in_reflection_path() {
        let eye = Vector3::new(0.0, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let c = shade(eye, &light_at(0.0, 10.0, -10.0), false);
        assert_abs_diff_eq!(c, Color::new(1.6364, 1.6364, 1.6364), epsilon = 1e-4);
    }

    #[test]
    fn light_behind_surface() {
        let c = shade(Vector3::new(0.0, 0.0, -1.0), &light_at(0.0, 0.0, 10.0), false);
        assert_abs_diff_eq!(c, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn surface_in_shadow() {
        let c = shade(Vector3::new(0.0, 0.0, -1.0), &light_at(0.0, 0.0, -10.0), true);
        assert_abs_diff_eq!(c, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn pattern_replaces_flat_color() {
        let m = Material {
            ambient: 1.0,
            diffuse: 0.0,
            specular: 0.0,
            pattern: Some(Arc::new(Pattern::stripe(Color::white(), Color::black()))),
            ..Material::default()
        };
        let eye = Vector3::new(0.0, 0.0, -1.0);
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let light = light_at(0.0, 0.0, -10.0);
        let p1 = Point3::new(0.9, 0.0, 0.0);
        let p2 = Point3::new(1.1, 0.0, 0.0);
        assert_eq!(m.lighting(&p1, &light, &p1, &eye, &normal, false), Color::white());
        assert_eq!(m.lighting(&p2, &light, &p2, &eye, &normal, false), Color::black());
    }

    #[test]
    fn cloned_material_aliases_pattern() {
        let m = Material {
            pattern: Some(Arc::new(Pattern::checkers(Color::white(), Color::black()))),
            ..Material::default()
        };
        let mut copy = m.clone();
        copy.ambient = 0.5;
        assert_abs_diff_eq!(m.ambient, 0.1);
        let (Some(a), Some(b)) = (&m.pattern, &copy.pattern) else {
            panic!("pattern missing");
        };
        assert!(Arc::ptr_eq(a, b));
    }
}
