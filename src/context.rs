//! Immutable parameters of one simulation run
use crate::bases::Wavenumbers;
use crate::error::{Error, Result};
use crate::field::Grid;

/// Grid, wavenumbers and physical parameters shared by all components.
///
/// Owned by the time loop, lent by reference to the solvers.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    /// Grid
    pub grid: Grid,
    /// Wavenumbers of the grid
    pub k: Wavenumbers,
    /// Viscosity
    pub nu: f64,
    /// Time step size
    pub dt: f64,
    /// Apply 2/3 rule to the nonlinear term
    pub dealias: bool,
}

impl SimulationContext {
    /// Return context
    ///
    /// # Errors
    /// `dt` not positive, `nu` negative or not finite, or the
    /// wavenumber matrices do not fit into memory.
    pub fn new(grid: Grid, nu: f64, dt: f64, dealias: bool) -> Result<Self> {
        if !(dt > 0. && dt.is_finite()) {
            return Err(Error::Config(format!("time step must be positive, got {}", dt)));
        }
        if !(nu >= 0. && nu.is_finite()) {
            return Err(Error::Config(format!("viscosity must be >= 0, got {}", nu)));
        }
        Ok(Self {
            k: Wavenumbers::new(&grid)?,
            grid,
            nu,
            dt,
            dealias,
        })
    }
}
