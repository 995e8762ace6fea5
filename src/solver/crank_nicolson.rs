//! Crank-Nicolson step for the vorticity equation
//!
//! Viscous term implicit, nonlinear term explicit:
//! $$
//! (1 - \delta t/2 \nu D2) w\\_new = (1 + \delta t/2 \nu D2) w - \delta t C(w)
//! $$
//! D2 is diagonal in Fourier space and non-positive, the left hand
//! side is therefore never singular.
use super::{check_shape, Solve};
use crate::context::SimulationContext;
use crate::error::Result;
use ndarray::{Array2, Zip};
use num_complex::Complex;

/// Container for Crank-Nicolson update
#[derive(Debug, Clone)]
pub struct CrankNicolson {
    /// 1 + dt/2 * nu * lap
    explicit: Array2<f64>,
    /// 1 / (1 - dt/2 * nu * lap)
    implicit: Array2<f64>,
    dt: f64,
}

impl CrankNicolson {
    /// Construct from context
    #[must_use]
    pub fn new(ctx: &SimulationContext) -> Self {
        Self::from_laplacian(&ctx.k.lap, ctx.nu, ctx.dt)
    }

    /// Construct from Laplacian in Fourier space
    #[must_use]
    pub fn from_laplacian(lap: &Array2<f64>, nu: f64, dt: f64) -> Self {
        let c = dt / 2. * nu;
        let explicit = lap.mapv(|l| 1. + c * l);
        let implicit = lap.mapv(|l| 1. / (1. - c * l));
        Self {
            explicit,
            implicit,
            dt,
        }
    }

    /// Right hand side:
    /// $$
    /// (1 + \delta t/2 \nu D2) w - \delta t C
    /// $$
    ///
    /// # Errors
    /// Shape of `vhat` or `conv` does not match.
    pub fn rhs(
        &self,
        vhat: &Array2<Complex<f64>>,
        conv: &Array2<Complex<f64>>,
    ) -> Result<Array2<Complex<f64>>> {
        check_shape(self.explicit.shape(), vhat)?;
        check_shape(self.explicit.shape(), conv)?;
        let dt = self.dt;
        let mut rhs = Array2::zeros(vhat.raw_dim());
        Zip::from(&mut rhs)
            .and(vhat)
            .and(conv)
            .and(&self.explicit)
            .par_for_each(|r, &w, &c, &e| *r = w * e - c * dt);
        Ok(rhs)
    }

    /// Advance vhat by one time step given the nonlinear term `conv`
    ///
    /// # Errors
    /// Shape of `vhat` or `conv` does not match.
    pub fn update(
        &self,
        vhat: &mut Array2<Complex<f64>>,
        conv: &Array2<Complex<f64>>,
    ) -> Result<()> {
        let rhs = self.rhs(vhat, conv)?;
        self.solve(&rhs, vhat)
    }
}

impl Solve for CrankNicolson {
    /// Implicit part, divide by (1 - dt/2 * nu * lap)
    fn solve(
        &self,
        input: &Array2<Complex<f64>>,
        output: &mut Array2<Complex<f64>>,
    ) -> Result<()> {
        check_shape(self.implicit.shape(), input)?;
        check_shape(self.implicit.shape(), output)?;
        Zip::from(output)
            .and(input)
            .and(&self.implicit)
            .par_for_each(|o, &r, &f| *o = r * f);
        Ok(())
    }
}
