//! Interval arithmetic for ray parameter ranges.
//!
//! A closed interval [min, max] used for valid ray t-ranges during
//! intersection and for clamping color channels on output.

/// Closed interval [min, max].
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Lower bound of the interval.
    pub min: f32,
    /// Upper bound of the interval.
    pub max: f32,
}

impl Interval {
    /// Interval containing nothing (min > max).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Interval containing every real number.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create an interval with the given bounds.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Whether `x` lies within the interval, bounds included.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Whether `x` lies strictly inside the interval, bounds excluded.
    ///
    /// Intersection uses this: a root exactly at `max` does not displace the
    /// current closest hit, so the first primitive wins exact ties.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp `x` to the interval bounds.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
