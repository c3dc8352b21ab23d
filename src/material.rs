//! Material scattering model.
//!
//! A closed enum over the three supported surface kinds: Lambertian
//! (diffuse), Metal (specular with fuzz) and Dielectric (refractive).
//! Materials are stateless per scatter call; their parameters are fixed at
//! construction.

use glam::Vec3A;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// RGB color with linear channel intensities.
pub type Color = Vec3A;

/// All components below this magnitude make a direction degenerate.
const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Outcome of a scatter event: the continuation ray and its per-channel
/// attenuation.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Fraction of light carried back along the path, per channel.
    pub attenuation: Color,
    /// The continuation ray, originating at the hit point.
    pub scattered: Ray,
}

/// Surface material kinds.
///
/// A closed sum type rather than trait objects: adding a kind extends the
/// single `scatter` match, and the compiler checks exhaustiveness.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Diffuse surface scattering uniformly around the normal.
    Lambertian {
        /// Surface reflectance per channel.
        albedo: Color,
    },
    /// Specular surface with randomized roughness.
    Metal {
        /// Metal tint per channel.
        albedo: Color,
        /// Reflection perturbation radius in [0, 1]; 0 is a perfect mirror.
        fuzz: f32,
    },
    /// Clear refractive surface such as glass or water.
    Dielectric {
        /// Index of refraction relative to the surrounding medium.
        refraction_index: f32,
    },
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Metallic material; fuzz is clamped to [0, 1] here so scatter never
    /// has to re-check it.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Refractive material with the given index of refraction.
    pub fn dielectric(refraction_index: f32) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `None` when the ray is absorbed; the path then terminates
    /// with no further light contribution.
    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord, rng: &mut R) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut direction = rec.normal + random::random_in_unit_sphere(rng);

                // The random offset can nearly cancel the normal; fall back
                // to the normal itself rather than trace a degenerate ray.
                if near_zero(direction) {
                    direction = rec.normal;
                }

                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(r_in.direction, rec.normal)
                    + fuzz * random::random_in_unit_sphere(rng);

                // High fuzz can push the reflection beneath the surface;
                // those rays are absorbed instead of tunneling through.
                if reflected.dot(rec.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        scattered: Ray::new(rec.p, reflected),
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refraction_index } => {
                let ri = if rec.front_face {
                    1.0 / refraction_index
                } else {
                    refraction_index
                };

                let unit_direction = r_in.direction.normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Total internal reflection leaves no refraction branch;
                // otherwise reflect with Schlick's probability.
                let cannot_refract = ri * sin_theta > 1.0;
                let direction =
                    if cannot_refract || reflectance(cos_theta, ri) > random::random_f32(rng) {
                        reflect(unit_direction, rec.normal)
                    } else {
                        refract(unit_direction, rec.normal, ri)
                    };

                Some(Scatter {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.p, direction),
                })
            }
        }
    }
}

/// Whether every component of `v` is near zero.
fn near_zero(v: Vec3A) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}

/// Mirror `v` about the surface normal `n`.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract unit vector `uv` through a surface with normal `n` by Snell's law.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of Fresnel reflectance at glancing angles.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
