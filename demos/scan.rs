//! Builds a few solids and runs a scene-wide haunch pass over them.
//!
//! ```text
//! cargo run --example scan                  # threshold 20
//! cargo run --example scan -- 2.5          # custom threshold
//! RUST_LOG=haunch=trace cargo run --example scan
//! ```

use haunch::math::{Point3, Vector3};
use haunch::operations::creation::{MakeBox, MakeFace, MakeWire};
use haunch::operations::haunch::{FindHaunchesInScene, HaunchParams, Highlighter};
use haunch::operations::shaping::Extrude;
use haunch::topology::TopologyStore;

fn main() -> haunch::Result<()> {
    // Default: WARN for everything, INFO for the detector and this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scan=info".parse().unwrap_or_default())
        .add_directive("haunch=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let max_distance = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(haunch::operations::haunch::DEFAULT_MAX_DISTANCE);

    let mut store = TopologyStore::new();
    MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, 1.0)).execute(&mut store)?;

    // An L-shaped rib: only its top and bottom correspond vertex for vertex.
    let profile = MakeWire::new(
        vec![
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(14.0, 0.0, 0.0),
            Point3::new(14.0, 2.0, 0.0),
            Point3::new(12.0, 2.0, 0.0),
            Point3::new(12.0, 4.0, 0.0),
            Point3::new(10.0, 4.0, 0.0),
        ],
        true,
    )
    .execute(&mut store)?;
    let profile = MakeFace::new(profile, vec![]).execute(&mut store)?;
    Extrude::new(profile, Vector3::new(0.0, 0.0, 3.0)).execute(&mut store)?;

    let mut highlighter = Highlighter::new();
    let found = FindHaunchesInScene::new(HaunchParams::new(max_distance))
        .execute(&store, &store, &mut highlighter)?;

    tracing::info!(
        found,
        highlighted = highlighter.len(),
        max_distance,
        "scan complete"
    );
    for (face, style) in highlighter.highlights() {
        tracing::info!(?face, color = ?style.color, "highlight");
    }
    Ok(())
}
