//! Component models of the circulation.
//!
//! This module provides the two nonlinear ingredients of the model:
//! - Valve: smoothed one-way valve gating flow between two compartments
//! - Elastance: periodic ventricular elastance driving the ventricle
//!
//! Both are pure functions of their inputs; the solver evaluates them
//! at every step.

mod elastance;
mod valve;

pub use elastance::{
    normalized_elastance, ElastanceSample, ElastanceWaveform, ACTIVATION_BASE_TIME,
    ACTIVATION_CYCLE_FRACTION, ACTIVATION_EXPONENT, HALF_ACTIVATION, NORMALIZATION,
    RELAXATION_EXPONENT, RELAXATION_ONSET,
};
pub use valve::{valve_conductance, Valve};
