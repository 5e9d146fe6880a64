//! Step stability diagnostics for the forward-Euler update.
//!
//! One explicit step maps `x` to `(I + dt·A)·x`. While the spectral radius
//! of `I + dt·A` stays at or below one the step does not amplify any mode.
//! These helpers only observe; the integrator never changes its step.

use super::operator::SystemMatrix;

/// Spectral radius of `I + dt·A`.
pub fn amplification_factor(a: &SystemMatrix, dt: f64) -> f64 {
    let step = SystemMatrix::identity() + a * dt;
    step.complex_eigenvalues()
        .iter()
        .map(|lambda| lambda.norm())
        .fold(0.0, f64::max)
}

/// Whether an amplification factor leaves every mode non-growing,
/// up to eigenvalue round-off.
pub fn is_non_amplifying(factor: f64) -> bool {
    factor <= 1.0 + f64::EPSILON.sqrt()
}
