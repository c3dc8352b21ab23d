//! Lumipath offline path tracer.
//!
//! Casts rays through a pixel grid into a scene of spheres, follows light
//! transport through stochastic bounces with a hard depth cutoff, and
//! averages per-pixel radiance into a plain-text PPM (or PNG) image.
//! Intersection is a brute-force linear scan; rendering is CPU-only and
//! parallel over rows with deterministic per-pixel random streams.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod hittable;
pub mod interval;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod sphere;
