//! Decaying Taylor-Green vortices
//!
//! The nonlinear term vanishes for this flow, the vorticity
//! decays as exp(-2 nu t).
//!
//! cargo run --release --example taylor_green
use vorticity2d::config::SimulationConfig;
use vorticity2d::initial::Scenario;
use vorticity2d::io::VtkWriter;
use vorticity2d::navier::Vorticity2D;
use vorticity2d::{integrate, Integrate};

fn main() -> vorticity2d::Result<()> {
    env_logger::Builder::new().parse_filters("info").init();
    // Parameters
    let config = SimulationConfig {
        nx: 64,
        ny: 64,
        nu: 1e-2,
        ..SimulationConfig::new(Scenario::TaylorGreen)
    };
    let params = config.resolve()?;
    let mut navier = Vorticity2D::from_config(&config)?;
    navier.set_writer(Box::new(VtkWriter::new("data")?.with_prefix("taylor_green")));
    integrate(&mut navier, params.t_final, params.plot_dump)?;

    // Compare with exact decay of the mode (1, 1)
    let exact = 2. * (-2. * config.nu * navier.get_time()).exp();
    let max = navier.vort.v.iter().fold(0f64, |m, v| m.max(v.abs()));
    println!("max |w| = {:8.6}, exact = {:8.6}", max, exact);
    Ok(())
}
