//! Sweeps a synthetic tapered wing and prints its geometry distribution as
//! CSV. Set `RUST_LOG=foilsect=debug` to follow each stage.

#[path = "../../tests/common/mod.rs"]
mod common;

use common::TaperedWing;
use foilsect::math::Point3;
use foilsect::sweep::{Direction, FlowFrame, SpanStations, SpanSweep};
use foilsect::SectionConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("foilsect=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut wing = TaperedWing {
        root_chord: 1.0,
        tip_chord: 0.4,
        root_twist: 4.0,
        tip_twist: -2.0,
        span: 5.0,
    };
    let stations = SpanStations::linspace(
        Point3::origin(),
        Point3::new(0.0, 0.0, 5.0),
        11,
        Direction::Z_POS,
    )?;
    let frame = FlowFrame::new(Direction::X_POS, Direction::Y_POS)?;

    let records = SpanSweep::new(&stations, frame, SectionConfig::default()).execute(&mut wing)?;

    println!("X,Y,Z,Twist,Chord,Thick");
    for r in records {
        println!(
            "{},{},{},{:.6},{:.6},{:.6}",
            r.x, r.y, r.z, r.twist, r.chord, r.thickness
        );
    }
    Ok(())
}
