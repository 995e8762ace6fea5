//! Roll-up of a perturbed shear layer
//!
//! cargo run --release --example shear_layer
use vorticity2d::config::SimulationConfig;
use vorticity2d::initial::Scenario;
use vorticity2d::io::VtkWriter;
use vorticity2d::navier::run;

fn main() -> vorticity2d::Result<()> {
    env_logger::Builder::new().parse_filters("info").init();
    let config = SimulationConfig {
        nx: 256,
        ny: 256,
        nu: 5e-4,
        dealias: true,
        ..SimulationConfig::new(Scenario::ShearLayer)
    };
    let writer = VtkWriter::new("data")?.with_prefix("shear_layer");
    let report = run(&config, Some(Box::new(writer)))?;
    println!("{:?}", report);
    Ok(())
}
