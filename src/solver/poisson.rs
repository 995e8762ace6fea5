//! Poisson Solver
//! Solve equations of the form:
//! ..math:
//!  D2 psi = -w
//!
//! In Fourier space D2 is diagonal with entries kx^2 + ky^2, hence
//! psi_hat = -w_hat / (kx^2 + ky^2) on every mode.
//!
//! The equation is singular at the zero wavenumber. The stream function
//! is defined up to a constant, its mean is set to zero.
use super::{check_shape, Solve};
use crate::bases::Wavenumbers;
use crate::context::SimulationContext;
use crate::error::Result;
use ndarray::{Array2, Zip};
use num_complex::Complex;

/// Container for Poisson Solver
#[derive(Debug, Clone)]
pub struct Poisson {
    /// -1 / (kx^2 + ky^2), zero at the mean mode
    inv_lap: Array2<f64>,
}

impl Poisson {
    /// Construct Poisson solver from context
    #[must_use]
    pub fn new(ctx: &SimulationContext) -> Self {
        Self::from_wavenumbers(&ctx.k)
    }

    /// Construct Poisson solver from wavenumbers
    #[must_use]
    pub fn from_wavenumbers(k: &Wavenumbers) -> Self {
        let mut inv_lap = Array2::<f64>::zeros(k.lap.raw_dim());
        Zip::indexed(&mut inv_lap)
            .and(&k.lap)
            .for_each(|(i, j), f, &lap| {
                // Singularity
                *f = if k.is_zero_mode(i, j) { 0. } else { -1. / lap };
            });
        Self { inv_lap }
    }
}

impl Solve for Poisson {
    /// Returns stream function psi_hat of vorticity w_hat
    fn solve(
        &self,
        input: &Array2<Complex<f64>>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()> {
        check_shape(self.inv_lap.shape(), input)?;
        check_shape(self.inv_lap.shape(), output)?;
        Zip::from(output)
            .and(input)
            .and(&self.inv_lap)
            .par_for_each(|psi, &w, &f| *psi = w * f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bases::{Fourier2, Transform};
    use crate::error::Error;
    use crate::field::Grid;
    use ndarray_rand::rand::rngs::SmallRng;
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn random_vhat(nx: usize, ny: usize) -> Array2<Complex<f64>> {
        let mut rng = SmallRng::seed_from_u64(42);
        let v: Array2<f64> = Array2::random_using((nx, ny), Uniform::new(-1., 1.), &mut rng);
        let mut vhat = Array2::zeros((nx, ny));
        Fourier2::new(nx, ny).unwrap().forward_real(&v, &mut vhat).unwrap();
        vhat
    }

    #[test]
    fn test_zero_mode() {
        let grid = Grid::periodic(10, 8).unwrap();
        let k = Wavenumbers::new(&grid).unwrap();
        let poisson = Poisson::from_wavenumbers(&k);
        let what = random_vhat(10, 8);
        assert!(what[[0, 0]].norm() > 0.);
        let mut psi = Array2::zeros((10, 8));
        poisson.solve(&what, &mut psi).unwrap();
        assert_eq!(psi[[0, 0]], Complex::new(0., 0.));
    }

    #[test]
    fn test_mode_decoupling() {
        let grid = Grid::periodic(10, 8).unwrap();
        let k = Wavenumbers::new(&grid).unwrap();
        let poisson = Poisson::from_wavenumbers(&k);
        let what = random_vhat(10, 8);
        let mut psi = Array2::zeros((10, 8));
        poisson.solve(&what, &mut psi).unwrap();
        for ((i, j), p) in psi.indexed_iter() {
            if k.is_zero_mode(i, j) {
                continue;
            }
            let lap = k.kx[[i, j]].powu(2) + k.ky[[i, j]].powu(2);
            let dif = (p * lap + what[[i, j]]).norm();
            assert!(dif < 1e-10, "mode ({}, {}) off by {}", i, j, dif);
        }
    }

    #[test]
    fn test_single_mode_exact() {
        let (nx, ny) = (8, 8);
        let grid = Grid::periodic(nx, ny).unwrap();
        let k = Wavenumbers::new(&grid).unwrap();
        let poisson = Poisson::from_wavenumbers(&k);
        let mut what = Array2::<Complex<f64>>::zeros((nx, ny));
        what[[1, 0]] = Complex::new(1., 0.);
        let mut psi = Array2::zeros((nx, ny));
        poisson.solve(&what, &mut psi).unwrap();
        let expected = -Complex::new(1., 0.) / k.kx[[1, 0]].powu(2);
        for ((i, j), p) in psi.indexed_iter() {
            if (i, j) == (1, 0) {
                assert!((p - expected).norm() < 1e-14);
                assert!((p.re - 1.).abs() < 1e-14);
            } else {
                assert_eq!(*p, Complex::new(0., 0.));
            }
        }
    }

    #[test]
    fn test_physical_space() {
        // w = 2 sin(x) sin(y)  ->  psi = sin(x) sin(y)
        let (nx, ny) = (16, 16);
        let grid = Grid::periodic(nx, ny).unwrap();
        let [x, y] = grid.coords();
        let poisson = Poisson::from_wavenumbers(&Wavenumbers::new(&grid).unwrap());
        let mut fourier = Fourier2::new(nx, ny).unwrap();
        let mut w = Array2::<f64>::zeros((nx, ny));
        for ((i, j), v) in w.indexed_iter_mut() {
            *v = 2. * x[i].sin() * y[j].sin();
        }
        let mut what = Array2::zeros((nx, ny));
        fourier.forward_real(&w, &mut what).unwrap();
        let mut psi_hat = Array2::zeros((nx, ny));
        poisson.solve(&what, &mut psi_hat).unwrap();
        let mut psi = Array2::zeros((nx, ny));
        fourier.backward_real(&psi_hat, &mut psi).unwrap();
        for ((i, j), p) in psi.indexed_iter() {
            assert!((p - x[i].sin() * y[j].sin()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let grid = Grid::periodic(8, 8).unwrap();
        let poisson = Poisson::from_wavenumbers(&Wavenumbers::new(&grid).unwrap());
        let what = Array2::zeros((8, 4));
        let mut psi = Array2::zeros((8, 8));
        let result = poisson.solve(&what, &mut psi);
        assert!(matches!(result, Err(Error::Shape { .. })));
    }
}
