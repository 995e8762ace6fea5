//! # Time integration
//!
//! Drive a pde, that implements [`Integrate`], from t = 0 to
//! the final time and hand out snapshots at a fixed step cadence.
use crate::error::{Error, Result};
use log::{debug, info};

/// Tolerance of the step count, relative to dt
const EPS_DT: f64 = 1e-4;

/// Integrate trait, step forward in time, and write results
pub trait Integrate {
    /// Derived quantities of the initial state (no time advance)
    ///
    /// # Errors
    /// Any stage of the initial solve fails.
    fn prepare(&mut self) -> Result<()>;
    /// Update solution
    ///
    /// # Errors
    /// Any stage of the step fails.
    fn update(&mut self) -> Result<()>;
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Write results (can be used as callback)
    ///
    /// # Errors
    /// Output fails.
    fn callback(&mut self, step: usize) -> Result<()>;
    /// Additional break criteria
    fn exit(&mut self) -> bool;
}

/// Lifecycle of a run, logged on each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// Initial state seeded, nothing solved yet
    Initialized,
    /// Time loop running
    Stepping,
    /// Final step done
    Terminated,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Number of updates
    pub steps: usize,
    /// Number of callbacks, including the initial one
    pub snapshots: usize,
    /// Final time
    pub time: f64,
}

/// Number of updates to reach `max_time` with step size `dt`
#[must_use]
pub fn num_steps(max_time: f64, dt: f64) -> usize {
    (max_time / dt + EPS_DT).floor() as usize
}

fn transition(status: &mut Status, next: Status) {
    debug!("{:?} -> {:?}", status, next);
    *status = next;
}

/// Integrade pde, that implements the Integrate trait.
///
/// Step 0 only prepares the solution and calls back. Every later step
/// updates the solution. The callback runs every `plot_dump` updates.
///
/// Stop Criteria:
/// 1. Time limit
/// 2. `exit` returns true, the run fails with [`Error::Diverged`]
///
/// # Errors
/// `plot_dump` is zero, time parameters are invalid, or
/// any error of the pde.
pub fn integrate<T: Integrate>(pde: &mut T, max_time: f64, plot_dump: usize) -> Result<Report> {
    if plot_dump == 0 {
        return Err(Error::Config("plot_dump must be at least 1".to_string()));
    }
    if !(max_time >= 0. && max_time.is_finite()) {
        return Err(Error::Config(format!(
            "final time must be >= 0, got {}",
            max_time
        )));
    }
    let dt = pde.get_dt();
    if !(dt > 0. && dt.is_finite()) {
        return Err(Error::Config(format!("time step must be positive, got {}", dt)));
    }
    let n = num_steps(max_time, dt);
    let mut status = Status::Initialized;
    debug!("{} steps of dt = {}, snapshot every {}", n, dt, plot_dump);

    pde.prepare()?;
    pde.callback(0)?;
    let mut snapshots = 1;

    transition(&mut status, Status::Stepping);
    for step in 1..=n {
        pde.update()?;
        if pde.exit() {
            return Err(Error::Diverged {
                step,
                time: pde.get_time(),
            });
        }
        if step % plot_dump == 0 {
            pde.callback(step)?;
            snapshots += 1;
        }
    }
    transition(&mut status, Status::Terminated);
    info!("time limit reached: {:.4}", pde.get_time());

    Ok(Report {
        steps: n,
        snapshots,
        time: pde.get_time(),
    })
}
