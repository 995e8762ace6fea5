//! Wavenumbers of a periodic grid
//!
//! Axis 0 carries the x-wavenumbers, axis 1 the y-wavenumbers:
//! $$
//! kx\[i, j\] = I \cdot 2\pi/L_x \cdot m_x\[i\], \quad
//! ky\[i, j\] = I \cdot 2\pi/L_y \cdot m_y\[j\]
//! $$
use crate::error::Result;
use crate::field::Grid;
use ndarray::{Array1, Array2, Zip};
use num_complex::Complex;
use std::f64::consts::PI;

/// Integer wavenumbers in fft order: `[0, 1, .., n/2, -n/2+1, .., -1]`
#[must_use]
pub fn wavenumbers(n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|i| {
        if i <= n / 2 {
            i as f64
        } else {
            i as f64 - n as f64
        }
    }))
}

/// Wavenumber matrices and the Laplacian in Fourier space
#[derive(Debug, Clone)]
pub struct Wavenumbers {
    /// Imaginary x-wavenumbers, constant along axis 1
    pub kx: Array2<Complex<f64>>,
    /// Imaginary y-wavenumbers, constant along axis 0
    pub ky: Array2<Complex<f64>>,
    /// kx^2 + ky^2 (real, non-positive)
    pub lap: Array2<f64>,
    /// Integer wavenumbers along axis 0
    pub mx: Array1<f64>,
    /// Integer wavenumbers along axis 1
    pub my: Array1<f64>,
}

impl Wavenumbers {
    /// Build wavenumbers of grid
    ///
    /// # Errors
    /// Matrices of grid size cannot be allocated.
    pub fn new(grid: &Grid) -> Result<Self> {
        let mx = wavenumbers(grid.nx);
        let my = wavenumbers(grid.ny);
        let sx = 2. * PI / grid.lx;
        let sy = 2. * PI / grid.ly;

        let mut kx: Array2<Complex<f64>> = grid.try_zeros()?;
        Zip::indexed(&mut kx).for_each(|(i, _), k| *k = Complex::new(0., sx * mx[i]));
        let mut ky: Array2<Complex<f64>> = grid.try_zeros()?;
        Zip::indexed(&mut ky).for_each(|(_, j), k| *k = Complex::new(0., sy * my[j]));
        let mut lap: Array2<f64> = grid.try_zeros()?;
        Zip::from(&mut lap)
            .and(&kx)
            .and(&ky)
            .for_each(|l, &a, &b| *l = (a * a + b * b).re);

        Ok(Self { kx, ky, lap, mx, my })
    }

    /// Shape of wavenumber matrices
    #[must_use]
    pub fn shape(&self) -> [usize; 2] {
        [self.mx.len(), self.my.len()]
    }

    /// True only at the mean (zero wavenumber) mode
    #[must_use]
    pub fn is_zero_mode(&self, i: usize, j: usize) -> bool {
        self.mx[i] == 0. && self.my[j] == 0.
    }

    /// Spectral multiplier kx^a * ky^b of the derivative
    /// \[a, b\] (\[1,0\] for partial x, \[0,1\] for partial y)
    #[must_use]
    pub fn derivative(&self, deriv: [usize; 2]) -> Array2<Complex<f64>> {
        let one = Complex::new(1., 0.);
        let mut k = Array2::from_elem(self.kx.raw_dim(), one);
        Zip::from(&mut k)
            .and(&self.kx)
            .and(&self.ky)
            .for_each(|k, &a, &b| *k = a.powu(deriv[0] as u32) * b.powu(deriv[1] as u32));
        k
    }

    /// 2/3-rule mask: 1 where |mx| <= nx/3 and |my| <= ny/3, else 0
    #[must_use]
    pub fn dealias_mask(&self) -> Array2<f64> {
        let [nx, ny] = self.shape();
        let cx = (nx / 3) as f64;
        let cy = (ny / 3) as f64;
        let mut mask = Array2::<f64>::zeros((nx, ny));
        Zip::indexed(&mut mask).for_each(|(i, j), m| {
            if self.mx[i].abs() <= cx && self.my[j].abs() <= cy {
                *m = 1.;
            }
        });
        mask
    }
}
