//! Error type of the solver
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result with solver [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Stage of a time step in which an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Seeding of the initial field and construction of the context
    Initialization,
    /// Stream function from vorticity
    Poisson,
    /// Velocity from stream function
    Velocity,
    /// Nonlinear term
    Advection,
    /// Crank-Nicolson update
    Integration,
    /// Snapshot output
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Initialization => "initialization",
            Stage::Poisson => "poisson solve",
            Stage::Velocity => "velocity",
            Stage::Advection => "advection",
            Stage::Integration => "integration",
            Stage::Output => "output",
        };
        write!(f, "{}", name)
    }
}

/// Errors of the spectral core and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown scenario, invalid grid or clock parameters
    #[error("configuration error: {0}")]
    Config(String),

    /// Array handed to a transform or solver has the wrong shape
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    Shape {
        /// Shape the operation was built for
        expected: [usize; 2],
        /// Shape it received
        got: Vec<usize>,
    },

    /// Field buffers could not be reserved
    #[error("cannot allocate fields of size {nx} x {ny}")]
    Allocation {
        /// Points in x
        nx: usize,
        /// Points in y
        ny: usize,
    },

    /// Snapshot could not be written
    #[error("io error ({path:?}): {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Error of the hdf5 library
    #[cfg(feature = "hdf5")]
    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Vorticity is no longer finite
    #[error("solution diverged at step {step} (t = {time:.4})")]
    Diverged {
        /// Step index
        step: usize,
        /// Simulation time
        time: f64,
    },

    /// Error raised while running a time step
    #[error("{stage} failed at step {step}: {source}")]
    Stage {
        /// Failing stage
        stage: Stage,
        /// Step index
        step: usize,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach stage and step index
    #[must_use]
    pub fn at(self, stage: Stage, step: usize) -> Self {
        Error::Stage {
            stage,
            step,
            source: Box::new(self),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape(expected: [usize; 2], got: &[usize]) -> Self {
        Error::Shape {
            expected,
            got: got.to_vec(),
        }
    }
}
