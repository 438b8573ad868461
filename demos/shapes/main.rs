//! Prints the volumes of the reference shapes next to their expected values.
//!
//! Usage:
//! ```text
//! cargo run --example shapes
//! RUST_LOG=polyvol=trace cargo run --example shapes   # per-face contributions
//! ```

use polyvol::math::{Point3, VOLUME_TOLERANCE};
use polyvol::mesh::Polyhedron;
use polyvol::operations::creation::{MakeHexahedron, MakePrism};
use polyvol::operations::query::Volume;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn parallelepiped(top_shift: f64, back_height: f64) -> [Point3; 8] {
    [
        p(0.0, 0.0, 0.0),
        p(4.0, 0.0, 0.0),
        p(4.0, 2.0, 0.0),
        p(0.0, 2.0, 0.0),
        p(0.0, top_shift, 2.0),
        p(4.0, top_shift, 2.0),
        p(4.0, 2.0 + top_shift, back_height),
        p(0.0, 2.0 + top_shift, back_height),
    ]
}

fn shapes() -> Vec<(&'static str, Polyhedron, f64)> {
    vec![
        (
            "pyramid",
            Polyhedron::new(
                vec![
                    p(0.0, 0.0, 0.0),
                    p(1.0, 0.0, 0.0),
                    p(0.0, 1.0, 0.0),
                    p(1.0, 1.0, 1.0),
                ],
                vec![[1, 0, 2], [1, 3, 0], [2, 3, 0], [1, 2, 3]],
            ),
            1.0 / 6.0,
        ),
        (
            "cube",
            MakeHexahedron::new([
                p(0.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(0.0, 2.0, 0.0),
                p(0.0, 0.0, 2.0),
                p(2.0, 0.0, 2.0),
                p(2.0, 2.0, 2.0),
                p(0.0, 2.0, 2.0),
            ])
            .execute(),
            8.0,
        ),
        (
            "parallelepiped",
            MakeHexahedron::new(parallelepiped(0.0, 2.0)).execute(),
            16.0,
        ),
        (
            "slanted parallelepiped",
            MakeHexahedron::new(parallelepiped(1.0, 2.0)).execute(),
            16.0,
        ),
        (
            "prism",
            MakePrism::new([
                p(0.0, 0.0, 0.0),
                p(4.0, 0.0, 0.0),
                p(0.0, 4.0, 0.0),
                p(0.0, 0.0, 6.0),
                p(4.0, 0.0, 6.0),
                p(0.0, 4.0, 6.0),
            ])
            .execute(),
            48.0,
        ),
        (
            "trapezoidal solid",
            MakeHexahedron::new(parallelepiped(0.0, 4.0)).execute(),
            24.0,
        ),
    ]
}

fn main() -> polyvol::Result<()> {
    // Default: WARN for everything, INFO for polyvol.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyvol=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shapes=info".parse().unwrap_or_default())
        .add_directive("polyvol=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut failures = 0;
    for (name, solid, expected) in shapes() {
        let volume = Volume::of(&solid).execute()?;
        let ok = (volume - expected).abs() < VOLUME_TOLERANCE;
        if ok {
            tracing::info!(name, volume, expected, "volume matches");
        } else {
            failures += 1;
            tracing::error!(name, volume, expected, "volume mismatch");
        }
        println!("{name:<24} {volume:>10.6}  (expected {expected:.6})");
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
