//! # Fourier
//! Complex-to-complex transform of two dimensional arrays from physical
//! space to Fourier space and vice versa.
//!
//! The transform is conducted along both axes, the heavy lifting is
//! done by ndrustfft. The forward transform is unnormalized, the backward
//! transform is normalized by `1 / (nx * ny)`.
use super::Transform;
use crate::error::{Error, Result};
use crate::field::try_zeros;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use ndrustfft::{ndfft, ndifft, FftHandler};
use num_complex::Complex;

/// Two dimensional discrete Fourier transform
pub struct Fourier2 {
    /// Number of points along axis 0
    pub nx: usize,
    /// Number of points along axis 1
    pub ny: usize,
    handler: [FftHandler<f64>; 2],
    buffer: Array2<Complex<f64>>,
}

impl Fourier2 {
    /// Return transform for arrays of shape (nx, ny)
    ///
    /// # Example
    /// ```
    /// use vorticity2d::bases::{Fourier2, Transform};
    /// use ndarray::Array2;
    /// let mut fourier = Fourier2::new(8, 6).unwrap();
    /// let v = Array2::<f64>::ones((8, 6));
    /// let mut vhat = Array2::zeros((8, 6));
    /// fourier.forward_real(&v, &mut vhat).unwrap();
    /// assert!((vhat[[0, 0]].re - 48.).abs() < 1e-10);
    /// ```
    ///
    /// # Errors
    /// Work buffer cannot be allocated.
    pub fn new(nx: usize, ny: usize) -> Result<Self> {
        let buffer = try_zeros(nx, ny)?;
        Ok(Self {
            nx,
            ny,
            handler: [FftHandler::new(nx), FftHandler::new(ny)],
            buffer,
        })
    }

    fn check(&self, shape: &[usize]) -> Result<()> {
        if shape == [self.nx, self.ny] {
            Ok(())
        } else {
            Err(Error::shape([self.nx, self.ny], shape))
        }
    }
}

impl Transform for Fourier2 {
    fn shape(&self) -> [usize; 2] {
        [self.nx, self.ny]
    }

    fn forward<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>
    where
        S: Data<Elem = Complex<f64>>,
    {
        self.check(input.shape())?;
        self.check(output.shape())?;
        ndfft(input, &mut self.buffer, &mut self.handler[0], 0);
        ndfft(&self.buffer, output, &mut self.handler[1], 1);
        Ok(())
    }

    fn backward<S>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()>
    where
        S: Data<Elem = Complex<f64>>,
    {
        self.check(input.shape())?;
        self.check(output.shape())?;
        ndifft(input, &mut self.buffer, &mut self.handler[0], 0);
        ndifft(&self.buffer, output, &mut self.handler[1], 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_rand::rand::rngs::SmallRng;
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use std::f64::consts::PI;

    fn approx_eq(result: &Array2<f64>, expected: &Array2<f64>) {
        let dif = 1e-10;
        for (a, b) in expected.iter().zip(result.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let (nx, ny) = (12, 10);
        let mut rng = SmallRng::seed_from_u64(7);
        let v: Array2<f64> = Array2::random_using((nx, ny), Uniform::new(-1., 1.), &mut rng);
        let mut fourier = Fourier2::new(nx, ny).unwrap();
        let mut vhat = Array2::zeros((nx, ny));
        let mut back = Array2::zeros((nx, ny));
        fourier.forward_real(&v, &mut vhat).unwrap();
        fourier.backward_real(&vhat, &mut back).unwrap();
        approx_eq(&back, &v);
    }

    #[test]
    fn test_single_mode() {
        // cos(x) on [0, 2pi) has weight n/2 at wavenumber +-1 along axis 0
        let (nx, ny) = (8, 4);
        let mut v = Array2::<f64>::zeros((nx, ny));
        for ((i, _), x) in v.indexed_iter_mut() {
            *x = (2. * PI * i as f64 / nx as f64).cos();
        }
        let mut fourier = Fourier2::new(nx, ny).unwrap();
        let mut vhat = Array2::zeros((nx, ny));
        fourier.forward_real(&v, &mut vhat).unwrap();
        let peak = (nx * ny) as f64 / 2.;
        assert!((vhat[[1, 0]].re - peak).abs() < 1e-10);
        assert!((vhat[[nx - 1, 0]].re - peak).abs() < 1e-10);
        assert!(vhat[[0, 0]].norm() < 1e-10);
        assert!(vhat[[1, 1]].norm() < 1e-10);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut fourier = Fourier2::new(8, 8).unwrap();
        let v = Array2::<f64>::zeros((8, 6));
        let mut vhat = Array2::zeros((8, 8));
        let result = fourier.forward_real(&v, &mut vhat);
        assert!(matches!(result, Err(Error::Shape { .. })));
    }

    #[test]
    fn test_allocation_failure() {
        let result = Fourier2::new(1 << 20, 1 << 20);
        assert!(matches!(
            result,
            Err(Error::Allocation {
                nx: 1048576,
                ny: 1048576
            })
        ));
    }
}
