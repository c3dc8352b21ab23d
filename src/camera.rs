//! Camera for primary ray generation.
//!
//! Maps normalized image-plane coordinates to world-space rays, with
//! defocus-disk jitter for depth of field. The camera is the only place
//! physical lens parameters enter the pipeline.

use glam::Vec3A;
use rand::Rng;

use crate::random;
use crate::ray::Ray;

/// Positionable camera with field of view and a thin-lens aperture.
///
/// Derived once from user parameters and immutable afterwards; ray
/// generation is a pure function of this state plus random jitter.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3A,
    lower_left_corner: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    // Basis vectors of the camera frame, kept for lens offsets.
    u: Vec3A,
    v: Vec3A,
    lens_radius: f32,
}

impl Camera {
    /// Create a camera from its physical parameters.
    ///
    /// `vfov` is the vertical field of view in degrees; the viewport sits at
    /// `focus_dist` so that lens offsets blur everything off the focus plane.
    ///
    /// # Panics
    ///
    /// Panics on a degenerate basis: `lookfrom == lookat`, `vup` collinear
    /// with the view direction, or non-positive `vfov`/`focus_dist`.
    pub fn new(
        lookfrom: Vec3A,
        lookat: Vec3A,
        vup: Vec3A,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        assert!(
            vfov > 0.0 && vfov < 180.0,
            "vertical field of view must lie in (0, 180) degrees, got {vfov}"
        );
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        assert!(focus_dist > 0.0, "focus distance must be positive");
        assert!(aperture >= 0.0, "aperture must be non-negative");

        let gaze = lookfrom - lookat;
        assert!(
            gaze.length_squared() > 0.0,
            "camera lookfrom and lookat must differ"
        );
        let w = gaze.normalize();
        let u_unnormalized = vup.cross(w);
        assert!(
            u_unnormalized.length_squared() > 1e-12,
            "camera up vector must not be collinear with the view direction"
        );
        let u = u_unnormalized.normalize();
        let v = w.cross(u);

        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let origin = lookfrom;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate the ray through normalized viewport coordinates `(s, t)`.
    ///
    /// `s` and `t` lie in [0, 1] with the origin at the bottom-left corner
    /// of the viewport. With a non-zero aperture the ray origin is jittered
    /// on the lens disk, producing depth-of-field blur.
    pub fn get_ray<R: Rng>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random::random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3A::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}

impl Default for Camera {
    /// Classic front camera: at the origin looking down -z, 90 degree
    /// vertical field of view, 16:9 viewport, no defocus blur.
    fn default() -> Self {
        Camera::new(
            Vec3A::ZERO,
            Vec3A::new(0.0, 0.0, -1.0),
            Vec3A::Y,
            90.0,
            16.0 / 9.0,
            0.0,
            1.0,
        )
    }
}
