//! Route an arrow between two boxes and hit-test a few points.
//!
//! Run with `cargo run --example route --features tracing`. Set `RUST_LOG`
//! to change verbosity (defaults to `arrowroute=debug`).

use arrowroute::routing::try_estimate_shape;
use arrowroute::{
    Element, ElementType, GlobalPoint, LocalPoint, Scene, calculate_points, is_point_in_shape,
    is_point_on_shape, shape_for_element,
};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arrowroute=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let scene = Scene::from_elements([
        Element::new("a", ElementType::Rectangle, 0.0, 0.0, 100.0, 100.0),
        Element::new("b", ElementType::Ellipse, 320.0, 200.0, 100.0, 100.0),
        Element::new("note", ElementType::Text, 150.0, 0.0, 80.0, 20.0),
    ]);

    let arrow = Element::arrow(
        "arrow",
        100.0,
        50.0,
        vec![LocalPoint::new(0.0, 0.0), LocalPoint::new(220.0, 200.0)],
    )
    .with_start_binding("a")
    .with_end_binding("b");

    println!("=== Route ===");
    for p in calculate_points(&arrow, Some(&scene)) {
        println!("  {}", arrow.to_world(p));
    }

    println!("\n=== Hit test ===");
    for element in scene.non_deleted_elements() {
        let shape = shape_for_element(element)?;
        for p in [GlobalPoint::new(50.0, 50.0), GlobalPoint::new(370.0, 200.0)] {
            println!(
                "  {} ({}) at {}: inside={} border={}",
                element.id,
                shape.family(),
                p,
                is_point_in_shape(p, &shape),
                is_point_on_shape(p, &shape, 1.0),
            );
        }
    }

    println!("\n=== Unsupported bound shape ===");
    if let Some(note) = scene.non_deleted_elements().find(|el| el.kind == ElementType::Text) {
        if let Err(err) = try_estimate_shape(note) {
            eprintln!("{:?}", miette::Report::new(err));
        }
    }

    Ok(())
}
