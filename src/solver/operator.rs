//! State transition operator.
//!
//! At every step the dynamics are linear in the state, `dx/dt = A(x, t)·x`,
//! but `A` depends on the current valve conductances and on the elastance
//! sample. Row by row:
//!
//! ```text
//! x1  ventricle : h - U·H21/R2 - U·H14/R3 | U·H21/R2 | 0 | U·H14/R3 | 0
//! x2  atrium    : H21/(R2·C2) | -1/(R1·C2) - H21/(R2·C2) | 1/(R1·C2) | 0 | 0
//! x3  arteries  : 0 | 1/(R1·C3) | -1/(R1·C3) | 0 | 1/C3
//! x4  aorta     : H14/(R3·C4) | 0 | 0 | -H14/(R3·C4) | -1/C4
//! x5  flow      : 0 | 0 | -1/L | 1/L | -R4/L
//! ```
//!
//! with `H21 = H(x2 - x1)` (inflow valve) and `H14 = H(x1 - x4)` (outflow valve).

use nalgebra::SMatrix;

use crate::components::{ElastanceSample, Valve};
use crate::model::{Compartment, ModelParams, StateVector, STATE_DIM};

/// Instantaneous 5×5 system matrix.
pub type SystemMatrix = SMatrix<f64, STATE_DIM, STATE_DIM>;

/// Conductances of the two valves for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValveState {
    /// `H21`: atrium to ventricle
    pub inflow: f64,
    /// `H14`: ventricle to aorta
    pub outflow: f64,
}

/// Builds the system matrix for a given state and elastance sample.
///
/// State-independent coefficients are folded once at construction; the
/// operator itself holds no per-step state and can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct StateOperator {
    valve: Valve,
    inv_r2: f64,
    inv_r3: f64,
    inv_r1_c2: f64,
    inv_r2_c2: f64,
    inv_r1_c3: f64,
    inv_c3: f64,
    inv_r3_c4: f64,
    inv_c4: f64,
    inv_l: f64,
    r4_over_l: f64,
}

impl StateOperator {
    /// Create an operator for the given parameters.
    pub fn new(params: &ModelParams) -> Self {
        Self {
            valve: Valve::new(params.valve_sharpness),
            inv_r2: 1.0 / params.r2,
            inv_r3: 1.0 / params.r3,
            inv_r1_c2: 1.0 / (params.r1 * params.c2),
            inv_r2_c2: 1.0 / (params.r2 * params.c2),
            inv_r1_c3: 1.0 / (params.r1 * params.c3),
            inv_c3: 1.0 / params.c3,
            inv_r3_c4: 1.0 / (params.r3 * params.c4),
            inv_c4: 1.0 / params.c4,
            inv_l: 1.0 / params.inductance,
            r4_over_l: params.r4 / params.inductance,
        }
    }

    /// Valve conductances for state `x`.
    pub fn valve_state(&self, x: &StateVector) -> ValveState {
        let ventricle = x[Compartment::Ventricle.index()];
        let atrium = x[Compartment::Atrium.index()];
        let aorta = x[Compartment::Aorta.index()];
        ValveState {
            inflow: self.valve.between(atrium, ventricle),
            outflow: self.valve.between(ventricle, aorta),
        }
    }

    /// System matrix for explicit valve conductances.
    pub fn assemble_with(&self, valves: ValveState, sample: ElastanceSample) -> SystemMatrix {
        let u = sample.elastance;
        let h = sample.log_derivative;
        let h21 = valves.inflow;
        let h14 = valves.outflow;

        let filling = u * h21 * self.inv_r2;
        let ejection = u * h14 * self.inv_r3;

        #[rustfmt::skip]
        let a = SystemMatrix::new(
            h - filling - ejection, filling, 0.0, ejection, 0.0,
            h21 * self.inv_r2_c2, -self.inv_r1_c2 - h21 * self.inv_r2_c2, self.inv_r1_c2, 0.0, 0.0,
            0.0, self.inv_r1_c3, -self.inv_r1_c3, 0.0, self.inv_c3,
            h14 * self.inv_r3_c4, 0.0, 0.0, -h14 * self.inv_r3_c4, -self.inv_c4,
            0.0, 0.0, -self.inv_l, self.inv_l, -self.r4_over_l,
        );
        a
    }

    /// System matrix for state `x`.
    pub fn assemble(&self, x: &StateVector, sample: ElastanceSample) -> SystemMatrix {
        self.assemble_with(self.valve_state(x), sample)
    }

    /// Time derivative `A(x)·x`.
    pub fn rate(&self, x: &StateVector, sample: ElastanceSample) -> StateVector {
        self.assemble(x, sample) * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(elastance: f64, log_derivative: f64) -> ElastanceSample {
        ElastanceSample {
            elastance,
            derivative: 0.0,
            log_derivative,
        }
    }

    #[test]
    fn test_closed_valves_decouple_ventricle() {
        let op = StateOperator::new(&ModelParams::reference());
        let valves = ValveState {
            inflow: 0.0,
            outflow: 0.0,
        };
        let a = op.assemble_with(valves, sample(1.0, 0.3));

        // Only the elastance drive remains on the ventricle row.
        assert_relative_eq!(a[(0, 0)], 0.3);
        assert_eq!(a[(0, 1)], 0.0);
        assert_eq!(a[(0, 3)], 0.0);
        assert_eq!(a[(1, 0)], 0.0);
        assert_eq!(a[(3, 0)], 0.0);
    }

    #[test]
    fn test_reference_coefficients() {
        let p = ModelParams::reference();
        let op = StateOperator::new(&p);
        let valves = ValveState {
            inflow: 1.0,
            outflow: 1.0,
        };
        let a = op.assemble_with(valves, sample(2.0, 0.0));

        assert_relative_eq!(a[(0, 1)], 2.0 / 0.005, epsilon = 1e-9);
        assert_relative_eq!(a[(0, 3)], 2.0 / 0.013, epsilon = 1e-9);
        assert_relative_eq!(a[(0, 0)], -(2.0 / 0.005) - (2.0 / 0.013), epsilon = 1e-9);
        assert_relative_eq!(a[(1, 1)], -1.0 / 4.4 - 1.0 / (0.005 * 4.4), epsilon = 1e-9);
        assert_relative_eq!(a[(2, 4)], 1.0 / 1.33, epsilon = 1e-12);
        assert_relative_eq!(a[(3, 4)], -1.0 / 0.8, epsilon = 1e-12);
        assert_relative_eq!(a[(4, 2)], -2000.0, epsilon = 1e-9);
        assert_relative_eq!(a[(4, 3)], 2000.0, epsilon = 1e-9);
        assert_relative_eq!(a[(4, 4)], -79.6, epsilon = 1e-9);
    }

    #[test]
    fn test_pressure_rows_conserve_equal_pressures() {
        // With equal pressures and no flow, only the ventricle's own h term moves.
        let op = StateOperator::new(&ModelParams::reference());
        let x = StateVector::new(50.0, 50.0, 50.0, 50.0, 0.0);
        let dx = op.rate(&x, sample(1.0, 0.0));
        for i in 0..STATE_DIM {
            assert_relative_eq!(dx[i], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_valve_state_follows_pressures() {
        let op = StateOperator::new(&ModelParams::reference());

        // Filling: atrium above ventricle, ventricle below aorta.
        let filling = op.valve_state(&StateVector::new(5.0, 8.0, 70.0, 80.0, 0.0));
        assert!(filling.inflow > 0.99);
        assert!(filling.outflow < 0.01);

        // Ejection: ventricle above aorta.
        let ejection = op.valve_state(&StateVector::new(120.0, 8.0, 70.0, 110.0, 0.0));
        assert!(ejection.inflow < 0.01);
        assert!(ejection.outflow > 0.99);
    }

    #[test]
    fn test_assemble_is_pure() {
        let op = StateOperator::new(&ModelParams::reference());
        let x = StateVector::new(8.0, 7.3, 70.0, 75.0, 20.0);
        let s = sample(0.5, 1.2);
        assert_eq!(op.assemble(&x, s), op.assemble(&x, s));
    }
}
