//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives, the
//! [`HitRecord`] produced by a successful intersection, and the
//! [`HittableList`] scene aggregator.

use std::sync::Arc;

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Result of a successful ray-primitive intersection.
///
/// Stack-local and transient: filled per intersection test, consumed by the
/// material scatter call, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray meets the surface.
    pub p: Vec3A,
    /// Unit surface normal at the hit point, oriented against the ray.
    pub normal: Vec3A,
    /// Ray parameter of the hit.
    pub t: f32,
    /// True when the ray struck the outside of the surface.
    ///
    /// Refractive materials use this to pick the right index-of-refraction
    /// ratio when entering versus leaving a body.
    pub front_face: bool,
    /// Material at the hit point.
    pub material: Material,
}

impl HitRecord {
    /// Build a record from an outward unit normal, orienting the stored
    /// normal against the incident ray.
    pub fn new(r: &Ray, p: Vec3A, outward_normal: Vec3A, t: f32, material: Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Objects that can be intersected by rays.
///
/// Implementors must be thread-safe: the scene is read-shared across render
/// workers.
pub trait Hittable: Send + Sync {
    /// Test for the nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Insertion-ordered collection of primitives forming a scene.
///
/// Intersection is a brute-force linear scan; the per-ray cost is
/// proportional to the number of primitives. Primitives are shared through
/// `Arc` so the same object may appear in several scenes.
#[derive(Default)]
pub struct HittableList {
    /// Scene members, in insertion order.
    pub objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove every primitive from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut best: Option<HitRecord> = None;

        for object in &self.objects {
            // Shrinking the upper bound strictly means a later primitive at
            // exactly the same t cannot displace an earlier one.
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                best = Some(rec);
            }
        }

        best
    }
}
