//! Random sampling helpers for ray tracing.
//!
//! Every function takes an explicit generator instead of reaching for a
//! process-wide source, so each render (and each parallel worker) owns a
//! deterministic, independently seeded stream. The concrete generator used
//! by the renderer is [`rand_chacha::ChaCha20Rng`].

use glam::Vec3A;
use rand::Rng;

/// Random f32 in [0.0, 1.0).
pub fn random_f32<R: Rng>(rng: &mut R) -> f32 {
    rng.random()
}

/// Random f32 in [min, max).
pub fn random_f32_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Random point strictly inside the unit sphere, by rejection sampling.
///
/// Used for diffuse scatter offsets and metal fuzz perturbation.
pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random point inside the unit disk in the z = 0 plane.
///
/// Used for depth-of-field lens offsets.
pub fn random_in_unit_disk<R: Rng>(rng: &mut R) -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
