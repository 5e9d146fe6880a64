//! Core types for the state-space representation.

use std::fmt;

use nalgebra::SVector;

use crate::error::{HemodynError, Result};

/// Number of state variables in the circulation model.
pub const STATE_DIM: usize = 5;

/// State vector `(x1..x5)`: four compartment pressures and the aortic-valve flow.
pub type StateVector = SVector<f64, STATE_DIM>;

/// A named entry of the [`StateVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compartment {
    /// x1: left-ventricular pressure
    Ventricle,
    /// x2: atrial / root pressure
    Atrium,
    /// x3: arterial pressure
    Arteries,
    /// x4: aortic pressure
    Aorta,
    /// x5: flow through the inductive (aortic-valve) branch
    Flow,
}

impl Compartment {
    /// All entries in state-vector order.
    pub const ALL: [Compartment; STATE_DIM] = [
        Compartment::Ventricle,
        Compartment::Atrium,
        Compartment::Arteries,
        Compartment::Aorta,
        Compartment::Flow,
    ];

    /// Row of this entry in the state vector and the trajectory.
    pub fn index(&self) -> usize {
        match self {
            Compartment::Ventricle => 0,
            Compartment::Atrium => 1,
            Compartment::Arteries => 2,
            Compartment::Aorta => 3,
            Compartment::Flow => 4,
        }
    }

    /// Short machine-friendly name (used for CSV headers and error messages).
    pub fn name(&self) -> &'static str {
        match self {
            Compartment::Ventricle => "ventricle",
            Compartment::Atrium => "atrium",
            Compartment::Arteries => "arteries",
            Compartment::Aorta => "aorta",
            Compartment::Flow => "flow",
        }
    }

    /// Whether this entry is a pressure (as opposed to a flow).
    pub fn is_pressure(&self) -> bool {
        !matches!(self, Compartment::Flow)
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{} ({})", self.index() + 1, self.name())
    }
}

/// Build a state vector from a slice, checking its length and finiteness.
pub fn state_from_slice(values: &[f64]) -> Result<StateVector> {
    if values.len() != STATE_DIM {
        return Err(HemodynError::StateDimension {
            expected: STATE_DIM,
            actual: values.len(),
        });
    }

    for (compartment, &value) in Compartment::ALL.iter().zip(values) {
        if !value.is_finite() {
            return Err(HemodynError::non_finite(
                format!("initial_state.{}", compartment.name()),
                value,
            ));
        }
    }

    Ok(StateVector::from_column_slice(values))
}
