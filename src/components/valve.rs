//! Smoothed one-way valve.
//!
//! An ideal heart valve behaves like a diode: it conducts when the upstream
//! pressure exceeds the downstream one and blocks otherwise. The hard step
//! is replaced by a logistic curve
//!
//!   H(Δ) = 1 / (1 + exp(-k·Δ))
//!
//! so the system matrix stays continuous in the state. Larger `k` gives a
//! sharper switch and a stiffer system.

use crate::DEFAULT_VALVE_SHARPNESS;

/// Logistic conductance of a valve for a pressure difference `delta`.
///
/// `delta` is `p_upstream - p_downstream`. Evaluated in the overflow-free
/// form, so very large `|k·Δ|` saturate to exactly 0 or 1 instead of
/// producing NaN.
pub fn valve_conductance(delta: f64, sharpness: f64) -> f64 {
    let z = sharpness * delta;
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// A valve with a fixed sharpness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valve {
    /// Sharpness constant `k` of the logistic switch
    pub sharpness: f64,
}

impl Default for Valve {
    fn default() -> Self {
        Self {
            sharpness: DEFAULT_VALVE_SHARPNESS,
        }
    }
}

impl Valve {
    /// Create a valve with the given sharpness.
    pub fn new(sharpness: f64) -> Self {
        Self { sharpness }
    }

    /// Conductance for `upstream - downstream` pressure difference.
    pub fn conductance(&self, delta: f64) -> f64 {
        valve_conductance(delta, self.sharpness)
    }

    /// Conductance between two pressures.
    pub fn between(&self, upstream: f64, downstream: f64) -> f64 {
        self.conductance(upstream - downstream)
    }

    /// Whether the valve is predominantly open (conductance above one half).
    pub fn is_open(&self, upstream: f64, downstream: f64) -> bool {
        self.between(upstream, downstream) > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valve_forward_and_reverse() {
        let v = Valve::default();

        assert_relative_eq!(v.conductance(0.0), 0.5);
        assert!(v.conductance(0.5) > 0.99);
        assert!(v.conductance(-0.5) < 0.01);
        assert!(v.is_open(10.0, 8.0));
        assert!(!v.is_open(8.0, 10.0));
    }

    #[test]
    fn test_valve_symmetry() {
        let v = Valve::default();
        for delta in [0.01, 0.1, 0.3, 1.0, 2.5] {
            assert_relative_eq!(
                v.conductance(delta) + v.conductance(-delta),
                1.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_valve_extreme_inputs_do_not_overflow() {
        let v = Valve::default();
        assert_eq!(v.conductance(1e6), 1.0);
        assert_eq!(v.conductance(-1e6), 0.0);
        assert!(!v.conductance(-100.0).is_nan());
    }

    #[test]
    fn test_sharpness_approaches_step() {
        let delta = 0.05;
        let soft = valve_conductance(delta, 1.0);
        let hard = valve_conductance(delta, 1000.0);
        assert!(soft < 0.52);
        assert!(hard > 1.0 - 1e-12);
        assert!(valve_conductance(-delta, 1000.0) < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn conductance_is_open_interval(delta in -3.0_f64..3.0) {
                let h = valve_conductance(delta, 10.0);
                prop_assert!(h > 0.0 && h < 1.0);
            }

            #[test]
            fn conductance_bounded_everywhere(delta in proptest::num::f64::NORMAL) {
                let h = valve_conductance(delta, 10.0);
                prop_assert!((0.0..=1.0).contains(&h));
            }

            #[test]
            fn conductance_sign_matches_delta(delta in 1e-6_f64..3.0) {
                prop_assert!(valve_conductance(delta, 10.0) > 0.5);
                prop_assert!(valve_conductance(-delta, 10.0) < 0.5);
            }

            #[test]
            fn conductance_is_monotonic(a in -5.0_f64..5.0, b in -5.0_f64..5.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(valve_conductance(lo, 10.0) <= valve_conductance(hi, 10.0));
            }
        }
    }
}
