#![warn(missing_docs)]
//! # vorticity2d: Pseudo-spectral solver for two dimensional flows
//!
//! Advances the vorticity of an incompressible flow on a doubly periodic
//! domain. All spatial derivatives are computed in Fourier space, the
//! nonlinear term is evaluated in physical space.
//!
//! Per time step:
//! - Poisson equation for the stream function ([`solver::Poisson`])
//! - Velocities from the stream function ([`navier::conv_term::velocity`])
//! - Nonlinear term ([`navier::conv_term::advection`])
//! - Crank-Nicolson update ([`solver::CrankNicolson`])
//!
//! # Example
//! Decaying Taylor-Green vortices
//! ```
//! use vorticity2d::config::SimulationConfig;
//! use vorticity2d::initial::Scenario;
//! use vorticity2d::navier::run;
//! let config = SimulationConfig {
//!     nx: 16,
//!     ny: 16,
//!     t_final: Some(0.1),
//!     ..SimulationConfig::new(Scenario::TaylorGreen)
//! };
//! let report = run(&config, None).unwrap();
//! assert_eq!(report.steps, 10);
//! ```
pub mod bases;
pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod initial;
pub mod integrate;
pub mod io;
pub mod navier;
pub mod solver;
pub use bases::{Fourier2, Transform, Wavenumbers};
pub use config::SimulationConfig;
pub use context::SimulationContext;
pub use error::{Error, Result};
pub use field::{Field2, Grid};
pub use initial::Scenario;
pub use integrate::{integrate, Integrate};
