//! End-to-end render tests: scene construction through PPM emission.

use std::sync::Arc;

use glam::Vec3A;

use lumipath::camera::Camera;
use lumipath::hittable::HittableList;
use lumipath::material::{Color, Material};
use lumipath::output::write_ppm;
use lumipath::renderer::{render, RenderSettings};
use lumipath::sphere::Sphere;

/// Ground sphere plus one foreground sphere, both diffuse.
fn two_sphere_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    )));
    world.add(Arc::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.7, 0.3, 0.3)),
    )));
    world
}

fn render_ppm(settings: &RenderSettings) -> Vec<u8> {
    let world = two_sphere_scene();
    let camera = Camera::default();
    let pixels = render(&world, &camera, settings);
    assert_eq!(
        pixels.len(),
        (settings.image_width * settings.image_height) as usize
    );

    let mut out = Vec::new();
    write_ppm(&mut out, &pixels, settings.image_width, settings.image_height).unwrap();
    out
}

#[test]
fn ppm_output_has_the_expected_header_and_bounded_channels() {
    let settings = RenderSettings::new(400, 16.0 / 9.0, 1, 1, 0);
    assert_eq!(settings.image_height, 225);

    let out = render_ppm(&settings);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("P3\n400 225\n255\n"));

    let mut channels = 0usize;
    for token in text.lines().skip(3).flat_map(|l| l.split_whitespace()) {
        let value: u32 = token.parse().expect("channel values are integers");
        assert!(value <= 255);
        channels += 1;
    }
    assert_eq!(channels, 400 * 225 * 3);
}

#[test]
fn fixed_seed_output_is_byte_identical() {
    let settings = RenderSettings::new(80, 16.0 / 9.0, 2, 4, 77);
    let first = render_ppm(&settings);
    let second = render_ppm(&settings);
    assert_eq!(first, second);
}

#[test]
fn depth_one_render_shows_background_only_where_rays_escape() {
    // With a single bounce every hit resolves to black, so any non-black
    // pixel comes straight from the background gradient.
    let settings = RenderSettings::new(64, 16.0 / 9.0, 1, 1, 0);
    let world = two_sphere_scene();
    let camera = Camera::default();
    let pixels = render(&world, &camera, &settings);

    let top_row_has_sky = pixels[..settings.image_width as usize]
        .iter()
        .any(|c| c.z > 0.9);
    assert!(top_row_has_sky, "top rows should see the sky gradient");

    let last_row_start = pixels.len() - settings.image_width as usize;
    let bottom_row_is_dark = pixels[last_row_start..]
        .iter()
        .all(|c| c.length_squared() < 1e-6);
    assert!(
        bottom_row_is_dark,
        "bottom rows aim at the ground sphere and must terminate black at depth 1"
    );
}

#[test]
fn deeper_paths_gather_light_on_surfaces() {
    // The same scene with a real depth budget must produce non-black
    // surface pixels: diffuse bounces escape to the sky within a few hops.
    let settings = RenderSettings::new(64, 16.0 / 9.0, 4, 50, 0);
    let world = two_sphere_scene();
    let camera = Camera::default();
    let pixels = render(&world, &camera, &settings);

    let last_row_start = pixels.len() - settings.image_width as usize;
    let lit = pixels[last_row_start..]
        .iter()
        .filter(|c| c.length_squared() > 1e-4)
        .count();
    assert!(lit > 0, "ground pixels should gather light with depth 50");
}
