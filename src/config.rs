//! # Run configuration
//!
//! A [`SimulationConfig`] names the scenario and the grid. Time step,
//! final time and output cadence fall back to the scenario's preset
//! unless given explicitly.
use crate::error::{Error, Result};
use crate::initial::Scenario;
use std::f64::consts::PI;

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Points in x
    pub nx: usize,
    /// Points in y
    pub ny: usize,
    /// Domain length in x
    pub lx: f64,
    /// Domain length in y
    pub ly: f64,
    /// Viscosity
    pub nu: f64,
    /// Initial condition
    pub scenario: Scenario,
    /// Seed of random initial conditions
    pub seed: u64,
    /// Apply 2/3 rule to the nonlinear term
    pub dealias: bool,
    /// Time step, overrides preset
    pub dt: Option<f64>,
    /// Final time, overrides preset
    pub t_final: Option<f64>,
    /// Steps between snapshots, overrides preset
    pub plot_dump: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            nx: 128,
            ny: 128,
            lx: 2. * PI,
            ly: 2. * PI,
            nu: 1e-3,
            scenario: Scenario::TaylorGreen,
            seed: 0,
            dealias: false,
            dt: None,
            t_final: None,
            plot_dump: None,
        }
    }
}

/// Clock parameters after merging with the preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParams {
    /// Time step
    pub dt: f64,
    /// Final time
    pub t_final: f64,
    /// Steps between snapshots
    pub plot_dump: usize,
}

impl SimulationConfig {
    /// Default configuration of scenario
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            ..Self::default()
        }
    }

    /// Merge explicit clock parameters with the scenario preset
    ///
    /// # Errors
    /// `dt` not positive, `t_final` negative or `plot_dump` zero.
    pub fn resolve(&self) -> Result<RunParams> {
        let preset = self.scenario.preset();
        let params = RunParams {
            dt: self.dt.unwrap_or(preset.dt),
            t_final: self.t_final.unwrap_or(preset.t_final),
            plot_dump: self.plot_dump.unwrap_or(preset.plot_dump),
        };
        if !(params.dt > 0. && params.dt.is_finite()) {
            return Err(Error::Config(format!(
                "time step must be positive, got {}",
                params.dt
            )));
        }
        if !(params.t_final >= 0. && params.t_final.is_finite()) {
            return Err(Error::Config(format!(
                "final time must be >= 0, got {}",
                params.t_final
            )));
        }
        if params.plot_dump == 0 {
            return Err(Error::Config("plot_dump must be at least 1".to_string()));
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset() {
        let config = SimulationConfig::new(Scenario::ShearLayer);
        let params = config.resolve().unwrap();
        assert_eq!(params.dt, 5e-3);
        assert_eq!(params.t_final, 20.);
        assert_eq!(params.plot_dump, 100);
    }

    #[test]
    fn test_override() {
        let config = SimulationConfig {
            dt: Some(1e-3),
            plot_dump: Some(7),
            ..SimulationConfig::new(Scenario::Random)
        };
        let params = config.resolve().unwrap();
        assert_eq!(params.dt, 1e-3);
        assert_eq!(params.t_final, 50.);
        assert_eq!(params.plot_dump, 7);
    }

    #[test]
    fn test_invalid() {
        for config in [
            SimulationConfig {
                dt: Some(0.),
                ..Default::default()
            },
            SimulationConfig {
                t_final: Some(-1.),
                ..Default::default()
            },
            SimulationConfig {
                plot_dump: Some(0),
                ..Default::default()
            },
        ] {
            assert!(matches!(config.resolve(), Err(Error::Config(_))));
        }
    }
}
