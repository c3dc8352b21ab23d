use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use glam::Vec3A;
use log::info;

use lumipath::camera::Camera;
use lumipath::cli::Args;
use lumipath::hittable::HittableList;
use lumipath::logger::init_logger;
use lumipath::material::{Color, Material};
use lumipath::output::{save_png, save_ppm};
use lumipath::renderer::{render, RenderSettings};
use lumipath::sphere::Sphere;

/// Build the demo scene: a large ground sphere and three spheres showing
/// each material kind.
fn create_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground = Material::lambertian(Color::new(0.8, 0.8, 0.0));
    let center = Material::lambertian(Color::new(0.1, 0.2, 0.5));
    let left = Material::dielectric(1.5);
    let right = Material::metal(Color::new(0.8, 0.6, 0.2), 0.1);

    world.add(Arc::new(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Arc::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.2), 0.5, center)));
    world.add(Arc::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, left)));
    world.add(Arc::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, right)));

    world
}

/// Camera looking down at the demo scene with a touch of defocus blur.
fn create_camera(aspect_ratio: f32) -> Camera {
    let lookfrom = Vec3A::new(3.0, 3.0, 2.0);
    let lookat = Vec3A::new(0.0, 0.0, -1.0);
    let focus_dist = (lookfrom - lookat).length();
    Camera::new(lookfrom, lookat, Vec3A::Y, 20.0, aspect_ratio, 0.2, focus_dist)
}

fn main() {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let settings = RenderSettings::new(
        args.width,
        args.aspect_ratio,
        args.samples_per_pixel,
        args.max_depth,
        args.seed,
    );
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        settings.image_width, settings.image_height, settings.samples_per_pixel, settings.max_depth
    );

    let world = create_scene();
    let camera = create_camera(args.aspect_ratio);

    let start = Instant::now();
    let pixels = render(&world, &camera, &settings);
    info!("Render finished in {:.2?}", start.elapsed());

    if args.output.ends_with(".png") {
        save_png(&pixels, settings.image_width, settings.image_height, &args.output);
    } else if args.output.ends_with(".ppm") {
        save_ppm(&pixels, settings.image_width, settings.image_height, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .ppm and .png formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
