use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use vorticity2d::config::SimulationConfig;
use vorticity2d::initial::Scenario;
use vorticity2d::io::{SnapshotWriter, VtkWriter};
use vorticity2d::navier::run;

/// Snapshot file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Legacy VTK, one ASCII file per snapshot
    Vtk,
    /// One hdf5 file per snapshot (requires the `hdf5` feature)
    Hdf5,
}

/// Pseudo-spectral solver for 2-D periodic flows in vorticity form
#[derive(Parser, Debug)]
#[command(name = "vorticity2d")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about, long_about = None)]
struct Cli {
    /// Initial condition (taylor-green, random, shear-layer, vortex-pair, merger, checkerboard)
    #[arg(short, long, default_value = "taylor-green")]
    scenario: String,

    /// Points in x
    #[arg(long, default_value_t = 128)]
    nx: usize,

    /// Points in y
    #[arg(long, default_value_t = 128)]
    ny: usize,

    /// Domain length in x
    #[arg(long, default_value_t = 2. * std::f64::consts::PI)]
    lx: f64,

    /// Domain length in y
    #[arg(long, default_value_t = 2. * std::f64::consts::PI)]
    ly: f64,

    /// Viscosity
    #[arg(long, default_value_t = 1e-3)]
    nu: f64,

    /// Time step (default: scenario preset)
    #[arg(long)]
    dt: Option<f64>,

    /// Final time (default: scenario preset)
    #[arg(long)]
    t_final: Option<f64>,

    /// Steps between snapshots (default: scenario preset)
    #[arg(long)]
    plot_dump: Option<usize>,

    /// Seed of random initial conditions
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Truncate the nonlinear term with the 2/3 rule
    #[arg(long)]
    dealias: bool,

    /// Output directory
    #[arg(short, long, default_value = "data")]
    out: PathBuf,

    /// Snapshot format
    #[arg(long, value_enum, default_value_t = Format::Vtk)]
    format: Format,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn writer(format: Format, out: &Path) -> vorticity2d::Result<Box<dyn SnapshotWriter>> {
    let writer: Box<dyn SnapshotWriter> = match format {
        Format::Vtk => Box::new(VtkWriter::new(out)?),
        #[cfg(feature = "hdf5")]
        Format::Hdf5 => Box::new(vorticity2d::io::Hdf5Writer::new(out)?),
        #[cfg(not(feature = "hdf5"))]
        Format::Hdf5 => {
            return Err(vorticity2d::Error::Config(
                "hdf5 output needs the `hdf5` feature".to_string(),
            ))
        }
    };
    Ok(writer)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .format_timestamp(None)
        .init();

    let scenario: Scenario = cli.scenario.parse()?;
    let config = SimulationConfig {
        nx: cli.nx,
        ny: cli.ny,
        lx: cli.lx,
        ly: cli.ly,
        nu: cli.nu,
        scenario,
        seed: cli.seed,
        dealias: cli.dealias,
        dt: cli.dt,
        t_final: cli.t_final,
        plot_dump: cli.plot_dump,
    };
    let writer = writer(cli.format, &cli.out)
        .with_context(|| format!("cannot write snapshots to {:?}", cli.out))?;
    let report = run(&config, Some(writer)).context("simulation failed")?;
    log::info!(
        "{} steps, {} snapshots, t = {:.4}",
        report.steps,
        report.snapshots,
        report.time
    );
    Ok(())
}
