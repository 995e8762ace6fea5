//! Diagnostics of the flow field
use ndarray::{Array2, Zip};

/// Returns kinetic energy
/// $$
/// E = 1/2 \langle u^2 + v^2 \rangle_V
/// $$
#[must_use]
pub fn eval_energy(ux: &Array2<f64>, uy: &Array2<f64>) -> f64 {
    let mut sum = 0.;
    Zip::from(ux).and(uy).for_each(|u, v| sum += u * u + v * v);
    0.5 * sum / ux.len().max(1) as f64
}

/// Returns enstrophy
/// $$
/// Z = 1/2 \langle w^2 \rangle_V
/// $$
#[must_use]
pub fn eval_enstrophy(vort: &Array2<f64>) -> f64 {
    0.5 * vort.iter().map(|w| w * w).sum::<f64>() / vort.len().max(1) as f64
}

/// Returns Courant number
/// $$
/// CFL = \max (|u|/dx + |v|/dy) \delta t
/// $$
#[must_use]
pub fn eval_cfl(ux: &Array2<f64>, uy: &Array2<f64>, dx: [f64; 2], dt: f64) -> f64 {
    let mut cfl: f64 = 0.;
    Zip::from(ux)
        .and(uy)
        .for_each(|u, v| cfl = cfl.max(u.abs() / dx[0] + v.abs() / dx[1]));
    cfl * dt
}
