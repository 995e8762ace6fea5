//! # Calculate velocities and convective terms u*dwdx
use crate::bases::Wavenumbers;
use crate::error::{Error, Result};
use crate::field::Field2;
use ndarray::{Array2, Zip};
use num_complex::Complex;

/// Physical space derivative of `vhat`, written to `deriv_field.v`
///
/// *deriv*: \[1,0\] for partial x, \[0,1\] for partial y
fn to_physical(
    vhat: &Array2<Complex<f64>>,
    deriv_field: &mut Field2,
    k: &Wavenumbers,
    deriv: [usize; 2],
) -> Result<()> {
    if vhat.shape() != deriv_field.vhat.shape() {
        return Err(Error::shape(k.shape(), vhat.shape()));
    }
    deriv_field.vhat.assign(vhat);
    deriv_field.vhat = deriv_field.gradient(k, deriv);
    deriv_field.backward()
}

/// Velocity from stream function
///
/// ux = dpsi/dy, uy = -dpsi/dx
///
/// # Errors
/// `psi_hat` does not match the grid of `deriv_field`.
pub fn velocity(
    psi_hat: &Array2<Complex<f64>>,
    deriv_field: &mut Field2,
    k: &Wavenumbers,
) -> Result<[Array2<f64>; 2]> {
    to_physical(psi_hat, deriv_field, k, [0, 1])?;
    let ux = deriv_field.v.to_owned();
    to_physical(psi_hat, deriv_field, k, [1, 0])?;
    let uy = deriv_field.v.mapv(|x| -x);
    Ok([ux, uy])
}

/// Calculate u*dwdx
///
/// # Input
///
///   *vhat*: ndarray (2D)
///        Field variable in spectral space
///
///   *deriv_field*: Field2
///        Work field for the derivative
///
///   *u*:  ndarray (2D)
///        Velocity field in physical space
///
///   *deriv*: [usize; 2]
///        \[1,0\] for partial x, \[0,1\] for partial y
///
/// # Return
/// Array of u*dwdx term in physical space.
///
/// # Errors
/// Shapes of `vhat`, `u` and `deriv_field` differ.
pub fn conv_term(
    vhat: &Array2<Complex<f64>>,
    deriv_field: &mut Field2,
    k: &Wavenumbers,
    u: &Array2<f64>,
    deriv: [usize; 2],
) -> Result<Array2<f64>> {
    if u.shape() != deriv_field.v.shape() {
        return Err(Error::shape(k.shape(), u.shape()));
    }
    to_physical(vhat, deriv_field, k, deriv)?;
    Ok(u * &deriv_field.v)
}

/// Nonlinear term ux * dwdx + uy * dwdy in spectral space.
///
/// If a mask is given, it is multiplied to the result (dealiasing).
///
/// # Errors
/// Shapes of the inputs differ.
pub fn advection(
    vhat: &Array2<Complex<f64>>,
    deriv_field: &mut Field2,
    k: &Wavenumbers,
    velocity: [&Array2<f64>; 2],
    mask: Option<&Array2<f64>>,
) -> Result<Array2<Complex<f64>>> {
    let mut conv = conv_term(vhat, deriv_field, k, velocity[0], [1, 0])?;
    conv += &conv_term(vhat, deriv_field, k, velocity[1], [0, 1])?;
    // -> spectral space
    deriv_field.v.assign(&conv);
    deriv_field.forward()?;
    if let Some(mask) = mask {
        Zip::from(&mut deriv_field.vhat)
            .and(mask)
            .par_for_each(|v, &m| *v = *v * m);
    }
    Ok(deriv_field.vhat.to_owned())
}
