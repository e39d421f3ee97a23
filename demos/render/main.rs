//! Renders a small reflective/refractive scene and prints it as PPM.
//!
//! Usage:
//! ```text
//! cargo run --release --example render > scene.ppm
//! cargo run --release --example render -- 400 200 > scene.ppm
//! RUST_LOG=lumen=info cargo run --example render > scene.ppm
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};
use std::io::Write;
use std::sync::Arc;

use lumen::geometry::{Cylinder, Triangle};
use lumen::math::{
    rotation_x, rotation_y, scaling, translation, view_transform, Color, Point3, Vector3,
};
use lumen::render::Camera;
use lumen::scene::{CsgOperation, Shape, World};
use lumen::shading::{Material, Pattern, PointLight};

fn main() -> lumen::Result<()> {
    // Default: WARN for everything, INFO for lumen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lumen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(200);
    let height = args.next().and_then(|a| a.parse().ok()).unwrap_or(100);

    let world = build_scene()?;
    let camera = Camera::new(width, height, FRAC_PI_3)?.with_transform(view_transform(
        &Point3::new(0.0, 1.5, -5.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Vector3::new(0.0, 1.0, 0.0),
    ))?;

    let canvas = camera.render(&world)?;
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(canvas.to_ppm().as_bytes()) {
        tracing::error!(%err, "failed to write image");
    }
    Ok(())
}

fn build_scene() -> lumen::Result<World> {
    let mut world = World::new();
    world.set_light(PointLight::new(
        Point3::new(-10.0, 10.0, -10.0),
        Color::white(),
    ));

    let checkers = Pattern::checkers(Color::new(0.9, 0.9, 0.9), Color::new(0.2, 0.2, 0.2))
        .with_transform(scaling(0.5, 0.5, 0.5))?;
    world.add(Shape::plane().with_material(Material {
        pattern: Some(Arc::new(checkers)),
        specular: 0.0,
        reflective: 0.2,
        ..Material::default()
    }));

    world.add(
        Shape::plane()
            .with_transform(translation(0.0, 0.0, 10.0) * rotation_x(FRAC_PI_2))?
            .with_material(Material {
                pattern: Some(Arc::new(Pattern::ring(
                    Color::new(0.3, 0.5, 0.8),
                    Color::new(0.2, 0.3, 0.6),
                ))),
                specular: 0.0,
                ..Material::default()
            }),
    );

    world.add(
        Shape::glass_sphere()
            .with_transform(translation(-0.5, 1.0, 0.5))?
            .with_material(Material {
                color: Color::new(0.1, 0.1, 0.1),
                diffuse: 0.1,
                reflective: 0.9,
                shininess: 300.0,
                ..Material::glass()
            }),
    );

    // A cube with a sphere carved out of it.
    let cube = world.insert(Shape::cube().with_material(Material {
        color: Color::new(0.8, 0.3, 0.2),
        ..Material::default()
    }));
    let hole = world.insert(Shape::sphere().with_transform(scaling(1.3, 1.3, 1.3))?);
    let carved = world.insert_csg(CsgOperation::Difference, cube, hole)?;
    world.set_transform(
        carved,
        translation(1.8, 0.5, 1.5) * rotation_y(0.6) * scaling(0.5, 0.5, 0.5),
    )?;
    world.add_object(carved)?;

    // A small pedestal group: a capped cylinder topped by a triangle.
    let pedestal = world.add_group();
    world.set_transform(pedestal, translation(-2.2, 0.0, 1.0))?;
    let column = world.insert(
        Shape::new(Cylinder::new(0.0, 1.0, true))
            .with_transform(scaling(0.3, 1.0, 0.3))?
            .with_material(Material {
                color: Color::new(0.9, 0.8, 0.4),
                ..Material::default()
            }),
    );
    world.add_child(pedestal, column)?;
    let fin = world.insert(Shape::new(Triangle::new(
        Point3::new(-0.4, 1.0, 0.0),
        Point3::new(0.4, 1.0, 0.0),
        Point3::new(0.0, 1.7, 0.0),
    )?));
    world.add_child(pedestal, fin)?;

    Ok(world)
}
