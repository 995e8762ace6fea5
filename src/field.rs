//! # Periodic grid and fields living on it
use crate::bases::{Fourier2, Transform, Wavenumbers};
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Zip};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::PI;

/// Doubly periodic, uniform grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Number of points in x (axis 0)
    pub nx: usize,
    /// Number of points in y (axis 1)
    pub ny: usize,
    /// Length of the domain in x
    pub lx: f64,
    /// Length of the domain in y
    pub ly: f64,
}

impl Grid {
    /// Return grid with `nx x ny` points on `[0, lx) x [0, ly)`
    ///
    /// # Errors
    /// Zero points or non-positive extents.
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(Error::Config(format!(
                "grid needs at least one point per direction, got {} x {}",
                nx, ny
            )));
        }
        if !(lx > 0. && ly > 0. && lx.is_finite() && ly.is_finite()) {
            return Err(Error::Config(format!(
                "domain extents must be positive, got {} x {}",
                lx, ly
            )));
        }
        if nx.checked_mul(ny).is_none() {
            return Err(Error::Allocation { nx, ny });
        }
        Ok(Self { nx, ny, lx, ly })
    }

    /// Return grid on `[0, 2pi) x [0, 2pi)`
    ///
    /// # Errors
    /// Zero points.
    pub fn periodic(nx: usize, ny: usize) -> Result<Self> {
        Self::new(nx, ny, 2. * PI, 2. * PI)
    }

    /// Grid spacing \[dx, dy\]
    #[must_use]
    pub fn spacing(&self) -> [f64; 2] {
        [self.lx / self.nx as f64, self.ly / self.ny as f64]
    }

    /// Grid coordinates \[x, y\]
    #[must_use]
    pub fn coords(&self) -> [Array1<f64>; 2] {
        let [dx, dy] = self.spacing();
        [
            Array1::from_iter((0..self.nx).map(|i| i as f64 * dx)),
            Array1::from_iter((0..self.ny).map(|j| j as f64 * dy)),
        ]
    }

    /// Returns an error unless both point counts are even
    ///
    /// # Errors
    /// Odd number of points in x or y.
    pub fn require_even(&self) -> Result<()> {
        if self.nx % 2 == 0 && self.ny % 2 == 0 {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "grid must have an even number of points, got {} x {}",
                self.nx, self.ny
            )))
        }
    }

    /// Allocate zeroed array of grid shape, reporting failure instead of aborting
    ///
    /// # Errors
    /// Buffer cannot be reserved.
    pub fn try_zeros<T: Clone + Zero>(&self) -> Result<Array2<T>> {
        try_zeros(self.nx, self.ny)
    }
}

/// Allocate zeroed `nx x ny` array, [`Error::Allocation`] if it does not fit
pub(crate) fn try_zeros<T: Clone + Zero>(nx: usize, ny: usize) -> Result<Array2<T>> {
    let n = nx.checked_mul(ny).ok_or(Error::Allocation { nx, ny })?;
    let mut buffer: Vec<T> = Vec::new();
    buffer
        .try_reserve_exact(n)
        .map_err(|_| Error::Allocation { nx, ny })?;
    buffer.resize(n, T::zero());
    Array2::from_shape_vec((nx, ny), buffer).map_err(|_| Error::Allocation { nx, ny })
}

/// Field struct holds data in physical and spectral space
///
/// v: ndarray
///
///   Holds data in physical space
///
/// vhat: ndarray
///
///   Holds data in spectral space
///
/// x: list of ndarrays
///
///   Grid points (physical space)
///
/// ```
/// use vorticity2d::field::{Field2, Grid};
/// let grid = Grid::periodic(8, 8).unwrap();
/// let mut field = Field2::new(&grid).unwrap();
/// field.v.fill(1.);
/// field.forward().unwrap();
/// assert!((field.vhat[[0, 0]].re - 64.).abs() < 1e-10);
/// ```
pub struct Field2 {
    /// Field in physical space
    pub v: Array2<f64>,
    /// Field in spectral space
    pub vhat: Array2<Complex<f64>>,
    /// Grid coordinates
    pub x: [Array1<f64>; 2],
    /// Grid spacing
    pub dx: [f64; 2],
    fourier: Fourier2,
}

impl Field2 {
    /// Returns zero field on grid
    ///
    /// # Errors
    /// Buffers cannot be allocated.
    pub fn new(grid: &Grid) -> Result<Self> {
        Ok(Self {
            v: grid.try_zeros()?,
            vhat: grid.try_zeros()?,
            x: grid.coords(),
            dx: grid.spacing(),
            fourier: Fourier2::new(grid.nx, grid.ny)?,
        })
    }

    /// Forward transform: v --> vhat
    ///
    /// # Errors
    /// `v` or `vhat` was replaced by an array of different shape.
    pub fn forward(&mut self) -> Result<()> {
        self.fourier.forward_real(&self.v, &mut self.vhat)
    }

    /// Backward transform: vhat --> v (real part)
    ///
    /// # Errors
    /// `v` or `vhat` was replaced by an array of different shape.
    pub fn backward(&mut self) -> Result<()> {
        self.fourier.backward_real(&self.vhat, &mut self.v)
    }

    /// Transform a real array to spectral space with this field's plan
    ///
    /// # Errors
    /// Input has the wrong shape.
    pub fn forward_from(&mut self, v: &Array2<f64>) -> Result<Array2<Complex<f64>>> {
        let mut vhat = Array2::zeros(self.vhat.raw_dim());
        self.fourier.forward_real(v, &mut vhat)?;
        Ok(vhat)
    }

    /// Spectral derivative of vhat
    /// \[1,0\] for partial x, \[0,1\] for partial y
    #[must_use]
    pub fn gradient(&self, k: &Wavenumbers, deriv: [usize; 2]) -> Array2<Complex<f64>> {
        let mut out = k.derivative(deriv);
        Zip::from(&mut out)
            .and(&self.vhat)
            .par_for_each(|o, &v| *o = *o * v);
        out
    }
}
