use crate::error::Result;
use crate::geometry::Ray;
use crate::math::{Color, Point3};

use super::{Computations, World};

impl World {
    /// Color seen along `ray`, following at most `remaining` bounces.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit shape cannot be resolved.
    pub fn color_at(&self, ray: &Ray, remaining: usize) -> Result<Color> {
        let intersections = self.intersect(ray);
        let Some(hit) = intersections.hit() else {
            return Ok(Color::black());
        };
        let comps = hit.prepare_computations(ray, &intersections, self)?;
        self.shade_hit(&comps, remaining)
    }

    /// Surface, reflected and refracted light at a prepared hit.
    ///
    /// Surfaces that both reflect and transmit blend the two by the Schlick
    /// reflectance; otherwise the terms add.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit shape cannot be resolved.
    pub fn shade_hit(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let material = &self.shape(comps.object)?.material;

        let surface = match &self.light {
            Some(light) => {
                let object_point = self.world_to_object(comps.object, &comps.over_point)?;
                material.lighting(
                    &object_point,
                    light,
                    &comps.over_point,
                    &comps.eyev,
                    &comps.normalv,
                    self.is_shadowed(&comps.over_point),
                )
            }
            None => Color::black(),
        };

        let reflected = self.reflected_color(comps, remaining)?;
        let refracted = self.refracted_color(comps, remaining)?;

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = comps.schlick();
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    /// Light arriving along the mirror direction, scaled by reflectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit shape cannot be resolved.
    pub fn reflected_color(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let reflective = self.shape(comps.object)?.material.reflective;
        if remaining == 0 || reflective == 0.0 {
            return Ok(Color::black());
        }
        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        Ok(self.color_at(&reflect_ray, remaining - 1)? * reflective)
    }

    /// Light transmitted through the surface, scaled by transparency.
    ///
    /// Black under total internal reflection.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit shape cannot be resolved.
    pub fn refracted_color(&self, comps: &Computations, remaining: usize) -> Result<Color> {
        let transparency = self.shape(comps.object)?.material.transparency;
        if remaining == 0 || transparency == 0.0 {
            return Ok(Color::black());
        }

        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Ok(Color::black());
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);
        Ok(self.color_at(&refract_ray, remaining - 1)? * transparency)
    }

    /// Whether something lies between `point` and the light.
    ///
    /// Always `false` without a light.
    #[must_use]
    pub fn is_shadowed(&self, point: &Point3) -> bool {
        let Some(light) = &self.light else {
            return false;
        };
        let to_light = light.position - point;
        let distance = to_light.norm();
        let ray = Ray::new(*point, to_light / distance);
        self.intersect(&ray)
            .hit()
            .is_some_and(|hit| hit.t < distance)
    }
}
