//! # Navier-Stokes in vorticity form
//!
//! Pipeline of one step:
//! vorticity -> stream function -> velocity -> advection -> Crank-Nicolson
pub mod conv_term;
pub mod functions;
pub mod vorticity;
pub use vorticity::{run, Vorticity2D};
