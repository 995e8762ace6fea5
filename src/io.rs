//! # Snapshot output
//!
//! The time loop hands a [`Snapshot`] to a [`SnapshotWriter`] every
//! `plot_dump` steps. Writers own their output directory.
#[cfg(feature = "hdf5")]
pub mod hdf5;
pub mod vtk;
#[cfg(feature = "hdf5")]
pub use self::hdf5::Hdf5Writer;
pub use vtk::VtkWriter;

use crate::error::Result;
use crate::field::Grid;
use ndarray::Array2;

/// Flow state at one output step, in physical space
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Step index
    pub step: usize,
    /// Simulation time
    pub time: f64,
    /// Grid
    pub grid: &'a Grid,
    /// Velocity in x
    pub ux: &'a Array2<f64>,
    /// Velocity in y
    pub uy: &'a Array2<f64>,
    /// Vorticity
    pub vort: &'a Array2<f64>,
}

/// Consumer of snapshots
pub trait SnapshotWriter {
    /// Persist snapshot
    ///
    /// # Errors
    /// Output cannot be written.
    fn write(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Create output directory
pub(crate) fn create_dir(dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| crate::error::Error::io(dir, e))
}
