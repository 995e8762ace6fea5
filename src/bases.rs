//! # Fourier bases of a doubly periodic domain
//!
//! [`Fourier2`] implements the transform between physical and spectral
//! space, [`Wavenumbers`] holds the spectral coordinates of a grid with
//! which derivatives become per-mode multiplications.
pub mod fourier;
pub mod wavenumber;
pub use fourier::Fourier2;
pub use wavenumber::{wavenumbers, Wavenumbers};

use crate::error::{Error, Result};
use crate::field::try_zeros;
use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};
use num_complex::Complex;

/// Transform from physical to spectral space and back
pub trait Transform {
    /// Shape of arrays the transform is planned for
    fn shape(&self) -> [usize; 2];

    /// Physical space --> spectral space
    ///
    /// # Errors
    /// Input or output does not match [`Transform::shape`].
    fn forward<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>
    where
        S: Data<Elem = Complex<f64>>;

    /// Spectral space --> physical space
    ///
    /// # Errors
    /// Input or output does not match [`Transform::shape`].
    fn backward<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>
    where
        S: Data<Elem = Complex<f64>>;

    /// Forward transform of a real array
    ///
    /// # Errors
    /// Input or output does not match [`Transform::shape`].
    fn forward_real<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>
    where
        S: Data<Elem = f64>,
    {
        let input = input.mapv(|x| Complex::new(x, 0.));
        self.forward(&input, output)
    }

    /// Backward transform, keeping only the real part.
    ///
    /// Imaginary parts are round-off for Hermitian input and are dropped.
    ///
    /// # Errors
    /// Input or output does not match [`Transform::shape`].
    fn backward_real<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<f64>,
    ) -> Result<()>
    where
        S: Data<Elem = Complex<f64>>,
    {
        let shape = self.shape();
        if output.shape() != shape {
            return Err(Error::shape(shape, output.shape()));
        }
        let mut buffer = try_zeros(shape[0], shape[1])?;
        self.backward(input, &mut buffer)?;
        Zip::from(output).and(&buffer).for_each(|o, c| *o = c.re);
        Ok(())
    }
}
