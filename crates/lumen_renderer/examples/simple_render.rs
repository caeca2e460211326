//! Simple ray tracer example.
//!
//! Renders a small scene with every primitive type and saves it as PPM and
//! PNG. An optional first argument names a JSON render config.
//!
//! ```text
//! cargo run --example simple_render -- config.json
//! ```

use std::f64::consts::PI;
use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_core::{UvMapping, UvPattern};
use lumen_renderer::{
    color, render, transform, Camera, Material, MatrixBackend, NaiveBackend, Pattern, PointLight,
    RenderConfig, Shape, Tuple, World,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            RenderConfig::from_json(&json)?
        }
        None => RenderConfig::default(),
    };

    let backend: Arc<dyn MatrixBackend> = Arc::new(NaiveBackend);
    log::info!("Using {} matrix backend", backend.name());

    let start = std::time::Instant::now();
    let world = build_scene(backend.clone())?;
    log::info!(
        "Scene built in {:?} ({} shapes)",
        start.elapsed(),
        world.scene().len()
    );

    let view = transform::view_transform(
        backend.as_ref(),
        Tuple::point(0.0, 2.5, -7.0),
        Tuple::point(0.0, 0.8, 0.0),
        Tuple::vector(0.0, 1.0, 0.0),
    )?;
    let camera = Camera::new(640, 360, PI / 3.0, backend).with_transform(view)?;

    let canvas = render(&camera, &world, &config)?;

    std::fs::write("output.ppm", canvas.to_ppm()).context("writing output.ppm")?;
    canvas
        .to_rgb_image()
        .save("output.png")
        .context("writing output.png")?;
    log::info!("Saved output.ppm and output.png");

    Ok(())
}

fn build_scene(backend: Arc<dyn MatrixBackend>) -> Result<World> {
    let light = PointLight::new(Tuple::point(-6.0, 8.0, -8.0), color(1.0, 1.0, 1.0));
    let mut world = World::new(light, backend.clone());

    // Checkered floor with a faint reflection
    let floor = Shape::plane().with_material(
        Material::default()
            .with_pattern(Pattern::checker(color(0.9, 0.9, 0.9), color(0.2, 0.2, 0.25)))
            .with_specular(0.0)
            .with_reflective(0.15),
    );

    // Glass ball in the middle
    let glass = Shape::sphere()
        .with_transform(transform::translation(0.0, 1.0, 0.0))
        .with_material(
            Material::glass()
                .with_color(color(0.1, 0.1, 0.1))
                .with_ambient(0.0)
                .with_diffuse(0.1)
                .with_specular(1.0)
                .with_shininess(300.0)
                .with_reflective(0.9),
        );

    // Striped cube on the left
    let cube = Shape::cube()
        .with_transform(transform::chain(
            backend.as_ref(),
            &[
                transform::scaling(0.6, 0.6, 0.6),
                transform::rotation_y(PI / 5.0),
                transform::translation(-2.4, 0.6, 0.5),
            ],
        )?)
        .with_material(Material::default().with_pattern(
            Pattern::stripe(color(0.8, 0.3, 0.2), color(0.95, 0.85, 0.6))
                .with_transform(transform::scaling(0.25, 0.25, 0.25)),
        ));

    // Globe-style sphere on the right
    let globe = Shape::sphere()
        .with_transform(transform::chain(
            backend.as_ref(),
            &[transform::scaling(0.7, 0.7, 0.7), transform::translation(2.3, 0.7, 0.3)],
        )?)
        .with_material(Material::default().with_pattern(Pattern::texture_map(
            UvPattern::checkers(16.0, 8.0, color(0.1, 0.4, 0.2), color(0.9, 0.9, 0.8)),
            UvMapping::Spherical,
        )));

    world.add_objects([floor, glass, cube, globe])?;

    // A lamp made of a capped cylinder and a cone, grouped and moved as one
    let lamp = world.add_object(
        Shape::group().with_transform(transform::translation(1.2, 0.0, 2.5)),
    )?;
    let scene = world.scene_mut();
    scene.add_child(
        lamp,
        Shape::truncated_cylinder(0.0, 1.4, true)
            .with_transform(transform::scaling(0.08, 1.0, 0.08))
            .with_material(Material::default().with_color(color(0.3, 0.3, 0.35))),
    )?;
    scene.add_child(
        lamp,
        Shape::truncated_cone(-1.0, 0.0, true)
            .with_transform(transform::chain(
                backend.as_ref(),
                &[transform::scaling(0.4, 0.5, 0.4), transform::translation(0.0, 1.9, 0.0)],
            )?)
            .with_material(Material::default().with_color(color(0.95, 0.75, 0.2))),
    )?;

    Ok(world)
}
