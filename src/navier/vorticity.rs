//! # Vorticity / stream-function formulation
//!
//! Solve the 2-dimensional incompressible Navier-Stokes equations on a
//! doubly periodic domain in terms of the vorticity w:
//! $$
//! \partial_t w + u \cdot \nabla w = \nu \nabla^2 w, \quad
//! \nabla^2 \psi = -w, \quad u = \partial_y \psi, \quad v = -\partial_x \psi
//! $$
//!
//! ```
//! use vorticity2d::context::SimulationContext;
//! use vorticity2d::field::Grid;
//! use vorticity2d::initial::Scenario;
//! use vorticity2d::navier::Vorticity2D;
//! use vorticity2d::integrate;
//! let grid = Grid::periodic(16, 16).unwrap();
//! let ctx = SimulationContext::new(grid, 1e-2, 1e-2, false).unwrap();
//! let vort = Scenario::TaylorGreen.generate(&grid, 0).unwrap();
//! let mut navier = Vorticity2D::new(ctx, &vort).unwrap();
//! let report = integrate(&mut navier, 0.1, 5).unwrap();
//! assert_eq!(report.steps, 10);
//! ```
use super::conv_term::{advection, velocity};
use super::functions::{eval_cfl, eval_energy, eval_enstrophy};
use crate::config::SimulationConfig;
use crate::context::SimulationContext;
use crate::error::{Error, Result, Stage};
use crate::field::{Field2, Grid};
use crate::integrate::{integrate, Integrate, Report};
use crate::io::{Snapshot, SnapshotWriter};
use crate::solver::{CrankNicolson, Poisson, Solve};
use log::info;
use ndarray::Array2;
use num_complex::Complex;
use std::collections::HashMap;

/// Vorticity solver on a doubly periodic grid
pub struct Vorticity2D {
    ctx: SimulationContext,
    /// Vorticity
    pub vort: Field2,
    /// Stream function in spectral space
    pub psi_hat: Array2<Complex<f64>>,
    /// Velocity in x
    pub ux: Array2<f64>,
    /// Velocity in y
    pub uy: Array2<f64>,
    /// Buffer for derivatives
    field: Field2,
    /// Stream function and velocity belong to the current vorticity
    velocity_current: bool,
    poisson: Poisson,
    cn: CrankNicolson,
    /// 2/3 rule mask, if dealiased
    mask: Option<Array2<f64>>,
    /// Time
    pub time: f64,
    step: usize,
    /// diagnostics like energy, enstrophy, ...
    pub diagnostics: HashMap<String, Vec<f64>>,
    writer: Option<Box<dyn SnapshotWriter>>,
}

impl Vorticity2D {
    /// Seed solver with initial vorticity in physical space
    ///
    /// # Errors
    /// `vort` does not match the grid or buffers cannot be allocated.
    pub fn new(ctx: SimulationContext, vort: &Array2<f64>) -> Result<Self> {
        Self::init(ctx, vort).map_err(|e| e.at(Stage::Initialization, 0))
    }

    fn init(ctx: SimulationContext, vort: &Array2<f64>) -> Result<Self> {
        let grid = ctx.grid;
        if vort.shape() != [grid.nx, grid.ny] {
            return Err(Error::shape([grid.nx, grid.ny], vort.shape()));
        }
        let mut field = Field2::new(&grid)?;
        field.v.assign(vort);
        field.forward()?;

        let mut diagnostics = HashMap::new();
        for key in ["time", "energy", "enstrophy", "cfl"] {
            diagnostics.insert(key.to_string(), Vec::<f64>::new());
        }
        let mask = if ctx.dealias {
            Some(ctx.k.dealias_mask())
        } else {
            None
        };

        Ok(Self {
            vort: field,
            psi_hat: grid.try_zeros()?,
            ux: grid.try_zeros()?,
            uy: grid.try_zeros()?,
            field: Field2::new(&grid)?,
            velocity_current: false,
            poisson: Poisson::new(&ctx),
            cn: CrankNicolson::new(&ctx),
            mask,
            time: 0.,
            step: 0,
            diagnostics,
            writer: None,
            ctx,
        })
    }

    /// Build grid, context and initial field from configuration
    ///
    /// # Errors
    /// Invalid configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let params = config.resolve()?;
        let grid = Grid::new(config.nx, config.ny, config.lx, config.ly)?;
        let ctx = SimulationContext::new(grid, config.nu, params.dt, config.dealias)?;
        let vort = config
            .scenario
            .generate(&grid, config.seed)
            .map_err(|e| e.at(Stage::Initialization, 0))?;
        Self::new(ctx, &vort)
    }

    /// Send snapshots to writer
    pub fn set_writer(&mut self, writer: Box<dyn SnapshotWriter>) {
        self.writer = Some(writer);
    }

    /// Grid, wavenumbers and parameters
    #[must_use]
    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Number of updates so far
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Stream function
    fn solve_stream(&mut self) -> Result<()> {
        self.poisson
            .solve(&self.vort.vhat, &mut self.psi_hat)
            .map_err(|e| e.at(Stage::Poisson, self.step))
    }

    /// Velocities from stream function
    fn reconstruct_velocity(&mut self) -> Result<()> {
        let [ux, uy] = velocity(&self.psi_hat, &mut self.field, &self.ctx.k)
            .map_err(|e| e.at(Stage::Velocity, self.step))?;
        self.ux = ux;
        self.uy = uy;
        self.velocity_current = true;
        Ok(())
    }

    /// Nonlinear term in spectral space
    fn conv_vort(&mut self) -> Result<Array2<Complex<f64>>> {
        advection(
            &self.vort.vhat,
            &mut self.field,
            &self.ctx.k,
            [&self.ux, &self.uy],
            self.mask.as_ref(),
        )
        .map_err(|e| e.at(Stage::Advection, self.step))
    }

    /// Crank-Nicolson update of vorticity
    fn solve_vort(&mut self, conv: &Array2<Complex<f64>>) -> Result<()> {
        self.velocity_current = false;
        self.cn
            .update(&mut self.vort.vhat, conv)
            .map_err(|e| e.at(Stage::Integration, self.step))
    }

    fn push_diagnostic(&mut self, key: &str, value: f64) {
        if let Some(d) = self.diagnostics.get_mut(key) {
            d.push(value);
        }
    }
}

impl Integrate for Vorticity2D {
    fn prepare(&mut self) -> Result<()> {
        self.solve_stream()?;
        self.reconstruct_velocity()
    }

    fn update(&mut self) -> Result<()> {
        self.step += 1;
        self.solve_stream()?;
        self.reconstruct_velocity()?;
        let conv = self.conv_vort()?;
        self.solve_vort(&conv)?;
        self.time += self.ctx.dt;
        Ok(())
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_dt(&self) -> f64 {
        self.ctx.dt
    }

    fn callback(&mut self, step: usize) -> Result<()> {
        // velocity of the current vorticity
        if !self.velocity_current {
            self.solve_stream()?;
            self.reconstruct_velocity()?;
        }
        self.vort
            .backward()
            .map_err(|e| e.at(Stage::Output, step))?;

        let energy = eval_energy(&self.ux, &self.uy);
        let enstrophy = eval_enstrophy(&self.vort.v);
        let cfl = eval_cfl(&self.ux, &self.uy, self.vort.dx, self.ctx.dt);
        self.push_diagnostic("time", self.time);
        self.push_diagnostic("energy", energy);
        self.push_diagnostic("enstrophy", enstrophy);
        self.push_diagnostic("cfl", cfl);
        info!(
            "step = {:6}    time = {:8.4}    E = {:5.3e}    Z = {:5.3e}    cfl = {:4.2}",
            step, self.time, energy, enstrophy, cfl
        );

        if let Some(writer) = self.writer.as_mut() {
            let snapshot = Snapshot {
                step,
                time: self.time,
                grid: &self.ctx.grid,
                ux: &self.ux,
                uy: &self.uy,
                vort: &self.vort.v,
            };
            writer
                .write(&snapshot)
                .map_err(|e| e.at(Stage::Output, step))?;
        }
        Ok(())
    }

    fn exit(&mut self) -> bool {
        // Break if vorticity is nan
        self.vort
            .vhat
            .iter()
            .any(|v| !(v.re.is_finite() && v.im.is_finite()))
    }
}

/// Run scenario of `config` to its final time
///
/// # Errors
/// Invalid configuration or failure in any stage of the run.
pub fn run(config: &SimulationConfig, writer: Option<Box<dyn SnapshotWriter>>) -> Result<Report> {
    let params = config.resolve()?;
    let mut navier = Vorticity2D::from_config(config)?;
    if let Some(writer) = writer {
        navier.set_writer(writer);
    }
    info!(
        "{}: {} x {} grid, nu = {}, dt = {}, t_final = {}",
        config.scenario, config.nx, config.ny, config.nu, params.dt, params.t_final
    );
    integrate(&mut navier, params.t_final, params.plot_dump)
}
