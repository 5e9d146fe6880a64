//! # Hemodyn Core
//!
//! A lumped-parameter simulator of the systemic circulation.
//!
//! This library provides:
//! - A five-state model: ventricle, atrium, arteries and aorta pressures
//!   plus the flow through an inductive aortic branch
//! - A periodic, time-varying ventricular elastance driving the heart
//! - Smoothed one-way valves between atrium, ventricle and aorta
//! - Fixed-step forward-Euler integration over many heartbeats
//! - Clinical summaries (systolic, diastolic, mean and pulse pressure)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - YAML scenario files
//! - [`model`] - Parameters, state layout and validation
//! - [`components`] - Valve and elastance models
//! - [`solver`] - State transition operator and Euler integration
//! - [`metrics`] - Blood-pressure statistics over a cycle
//! - [`report`] - Console summary and CSV export (CLI only)
//!
//! ## Usage
//!
//! ```no_run
//! use hemodyn_core::{ModelParams, PressureMetrics, Simulator};
//! use hemodyn_core::model::REFERENCE_INITIAL_STATE;
//!
//! # fn main() -> hemodyn_core::Result<()> {
//! let sim = Simulator::new(ModelParams::reference())?;
//! let result = sim.run_from_slice(&REFERENCE_INITIAL_STATE)?;
//! let bp = PressureMetrics::final_cycle(&result.trajectory)?;
//! println!("{:.0}/{:.0} mmHg", bp.systolic, bp.diastolic);
//! # Ok(())
//! # }
//! ```
//!
//! ## Simulation Method
//!
//! For each time step the simulator:
//!
//! 1. Evaluates both valve conductances from the current pressures
//! 2. Assembles the 5×5 system matrix `A` from those conductances and the
//!    elastance sample of the current step
//! 3. Advances the state with `x ← x + dt·A·x`
//!
//! The elastance waveform is computed once for a single beat and indexed
//! modulo the beat length afterwards.

pub mod components;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod solver;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use error::{HemodynError, Result};
pub use metrics::PressureMetrics;
pub use model::{Compartment, ModelParams, StateVector};
pub use solver::{SimulationResult, Simulator, SimulatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCirculationSim;

/// Default sharpness of the logistic valve switch.
pub const DEFAULT_VALVE_SHARPNESS: f64 = 10.0;

/// Seconds per minute, converts a heart rate into a cycle duration.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
