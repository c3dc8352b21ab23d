//! Ray representation for path tracing.
//!
//! A ray is the half-line r(t) = origin + t * direction with t >= 0; it is
//! the unit of work for every intersection and scattering query in the crate.

use glam::Vec3A;

/// Ray in 3D space defined by an origin and a direction.
///
/// Immutable once constructed; scattering produces new rays instead of
/// mutating the incoming one.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or the previous hit point for
    /// scattered rays.
    pub origin: Vec3A,

    /// Direction of the ray.
    ///
    /// Not required to be normalized; intersection math accounts for the
    /// actual length, and the background gradient normalizes where it matters.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray from an origin and a direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray: origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
