//! Time integration of the circulation model.
//!
//! This module provides the numerical engine.
//!
//! ## State-space form
//!
//! The model is written as
//! ```text
//! dx/dt = A(x, t) · x
//! ```
//! where `x = (x1..x5)` holds the four compartment pressures and the
//! aortic flow, and `A` is rebuilt at every step from the current valve
//! conductances and the elastance sample (see [`StateOperator`]).
//!
//! ## Integration
//!
//! A fixed-step forward-Euler update
//! ```text
//! x[n+1] = x[n] + dt · A(x[n], n) · x[n]
//! ```
//! is applied for `points_per_cycle · cycles` steps. The scheme is only
//! conditionally stable: `dt` must stay well below the fastest time
//! constant of `A` (mostly `L / R4` and the valve switching). The
//! [`stability`] helpers can report the per-step amplification, and
//! [`SimulatorConfig::with_divergence_limit`] can abort runs that blow up.

mod operator;
mod simulator;
pub mod stability;
mod trajectory;

pub use operator::{StateOperator, SystemMatrix, ValveState};
pub use simulator::{SimulationResult, Simulator, SimulatorConfig};
pub use trajectory::Trajectory;
