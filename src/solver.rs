//! # Per-mode solvers in Fourier space
//!
//! The Laplacian is diagonal in Fourier space, so both the Poisson
//! equation and the implicit part of the Crank-Nicolson scheme reduce
//! to a scalar operation on every mode.
pub mod crank_nicolson;
pub mod poisson;
pub use crank_nicolson::CrankNicolson;
pub use poisson::Poisson;

use crate::error::{Error, Result};
use ndarray::Array2;
use num_complex::Complex;

/// Solve linear systems of the form: M x = b.
pub trait Solve {
    /// Solves M x = b, writes x to output.
    /// Output matches input (b) in type and size.
    ///
    /// # Errors
    /// Input or output does not match the shape the solver was built for.
    fn solve(
        &self,
        input: &Array2<Complex<f64>>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>;
}

pub(crate) fn check_shape(expected: &[usize], input: &Array2<Complex<f64>>) -> Result<()> {
    if input.shape() == expected {
        Ok(())
    } else {
        Err(Error::shape([expected[0], expected[1]], input.shape()))
    }
}
