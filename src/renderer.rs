//! Path integrator and sampler loop.
//!
//! `ray_color` follows a ray through the scene, bouncing off materials until
//! the depth budget runs out or the ray escapes to the background. `render`
//! drives it per pixel, averaging jittered camera rays, with rows processed
//! in parallel and a deterministic random stream per pixel.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::{Hittable, HittableList};
use crate::interval::Interval;
use crate::material::Color;
use crate::ray::Ray;

/// Lower bound for valid hit parameters.
///
/// A small positive epsilon rather than zero, so rays spawned at a surface
/// do not immediately re-hit it (shadow acne).
const T_MIN: f32 = 0.001;

/// Fixed-at-startup render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Output image width in pixels.
    pub image_width: u32,
    /// Output image height in pixels, derived from the aspect ratio.
    pub image_height: u32,
    /// Number of jittered camera rays averaged per pixel.
    pub samples_per_pixel: u32,
    /// Depth budget: maximum bounces before a path is cut to black.
    pub max_depth: u32,
    /// Base seed for the per-pixel random streams.
    pub seed: u64,
}

impl RenderSettings {
    /// Build settings from a width and aspect ratio, deriving the height.
    ///
    /// # Panics
    ///
    /// Panics on a zero width or sample count, or a non-positive aspect
    /// ratio.
    pub fn new(
        image_width: u32,
        aspect_ratio: f32,
        samples_per_pixel: u32,
        max_depth: u32,
        seed: u64,
    ) -> Self {
        assert!(image_width > 0, "image width must be positive");
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        assert!(samples_per_pixel > 0, "sample count must be positive");

        let image_height = ((image_width as f32 / aspect_ratio) as u32).max(1);
        Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            seed,
        }
    }
}

/// Background color for a ray that escaped the scene.
///
/// A vertical gradient from white at the bottom to sky blue at the top,
/// a pure function of the ray's direction.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::ONE + a * Color::new(0.5, 0.7, 1.0)
}

/// Radiance carried back along a ray, following up to `depth` bounces.
///
/// Exhausting the depth budget truncates the path to black; this is a hard
/// cutoff with a small accepted bias, not Russian roulette.
pub fn ray_color<R: Rng>(r: &Ray, world: &dyn Hittable, depth: u32, rng: &mut R) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::new(T_MIN, f32::INFINITY)) {
        return match rec.material.scatter(r, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        };
    }

    background(r)
}

/// Independent random stream for one pixel.
///
/// Derived from the base seed and the pixel index, so the result of a render
/// does not depend on how pixels are scheduled across threads.
fn pixel_rng(seed: u64, pixel_index: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed ^ pixel_index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Render the scene into a row-major pixel buffer, top row first.
///
/// Each pixel averages `samples_per_pixel` jittered camera rays. Rows are
/// rendered in parallel; a fixed seed reproduces the image bit for bit
/// regardless of the worker count.
pub fn render(world: &HittableList, camera: &Camera, settings: &RenderSettings) -> Vec<Color> {
    let width = settings.image_width;
    let height = settings.image_height;

    info!(
        "Rendering {}x{} at {} samples per pixel on {} threads...",
        width,
        height,
        settings.samples_per_pixel,
        rayon::current_num_threads()
    );

    let pb = ProgressBar::new(height as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    // Jitter denominators; guarded so a 1-pixel axis does not divide by zero.
    let u_scale = (width.max(2) - 1) as f32;
    let v_scale = (height.max(2) - 1) as f32;

    let pixels: Vec<Color> = (0..height)
        .into_par_iter()
        .flat_map_iter(|row| {
            let mut line = Vec::with_capacity(width as usize);
            for col in 0..width {
                let pixel_index = row as u64 * width as u64 + col as u64;
                let mut rng = pixel_rng(settings.seed, pixel_index);

                let mut pixel_color = Color::ZERO;
                for _ in 0..settings.samples_per_pixel {
                    let s = (col as f32 + rng.random::<f32>()) / u_scale;
                    // Row 0 is the top of the image; t counts from the bottom.
                    let t = ((height - 1 - row) as f32 + rng.random::<f32>()) / v_scale;
                    let ray = camera.get_ray(s, t, &mut rng);
                    pixel_color += ray_color(&ray, world, settings.max_depth, &mut rng);
                }
                line.push(pixel_color / settings.samples_per_pixel as f32);
            }
            pb.inc(1);
            line.into_iter()
        })
        .collect();

    pb.finish();
    debug_assert_eq!(pixels.len(), width as usize * height as usize);
    pixels
}
