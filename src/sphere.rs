//! Sphere primitive.
//!
//! The sole geometric primitive: ray intersection solves the quadratic from
//! substituting the ray equation into |P - center|^2 = radius^2, using the
//! half-b formulation.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere defined by center, radius and material.
///
/// Immutable after construction. Materials are plain values, so several
/// spheres may carry the same material without sharing machinery.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,
    /// Radius, strictly positive.
    pub radius: f32,
    /// Material governing light interaction at the surface.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// # Panics
    ///
    /// Panics when the radius is not finite and strictly positive. Degenerate
    /// geometry is a construction error, not something the intersection code
    /// should paper over.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be finite and positive, got {radius}"
        );
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;

        // Quadratic coefficients with b = -2h.
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the smaller root; fall back to the larger one.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, p, outward_normal, root, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Material};

    fn test_sphere(center: Vec3A, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::lambertian(Color::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn head_on_ray_hits_front_surface() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("head-on ray must hit");
        assert!(rec.t > 0.0);
        assert!((rec.t - 4.0).abs() < 1e-4);
        // The hit point lies on the surface, one radius from the center.
        assert!(((rec.p - sphere.center).length() - sphere.radius).abs() < 1e-4);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn perpendicular_ray_misses() {
        let sphere = test_sphere(Vec3A::new(0.0, 10.0, 0.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));
        assert!(sphere.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn ray_from_inside_hits_back_face() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&r, Interval::new(0.001, f32::INFINITY))
            .expect("ray from the center must exit through the shell");
        assert!((rec.t - 1.0).abs() < 1e-4);
        assert!(!rec.front_face);
        // Normal is flipped to face the incoming ray.
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn larger_root_used_when_smaller_is_excluded() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        // Entry point at t = 4 lies outside the interval, exit at t = 6 inside.
        let rec = sphere.hit(&r, Interval::new(4.5, f32::INFINITY)).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-4);
    }

    #[test]
    fn hit_outside_interval_is_rejected() {
        let sphere = test_sphere(Vec3A::new(0.0, 0.0, -5.0), 1.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&r, Interval::new(0.001, 3.9)).is_none());
    }

    #[test]
    #[should_panic(expected = "sphere radius")]
    fn zero_radius_is_rejected_at_construction() {
        test_sphere(Vec3A::ZERO, 0.0);
    }

    #[test]
    #[should_panic(expected = "sphere radius")]
    fn negative_radius_is_rejected_at_construction() {
        test_sphere(Vec3A::ZERO, -1.0);
    }
}
