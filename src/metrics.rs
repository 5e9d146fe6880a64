//! Clinical summary statistics.
//!
//! Blood pressure is reported over one completed cycle, normally the last
//! one, once the model has settled into its periodic regime:
//! - systolic: maximum aortic pressure
//! - diastolic: minimum aortic pressure
//! - pulse: systolic - diastolic
//! - mean: arithmetic mean over the cycle

use crate::error::{HemodynError, Result};
use crate::model::Compartment;
use crate::solver::Trajectory;

/// Systolic, diastolic, mean and pulse pressure of one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureMetrics {
    /// Maximum pressure
    pub systolic: f64,
    /// Minimum pressure
    pub diastolic: f64,
    /// Arithmetic mean pressure
    pub mean: f64,
    /// `systolic - diastolic`
    pub pulse: f64,
}

impl PressureMetrics {
    /// Statistics of an arbitrary series.
    pub fn from_series(series: &[f64]) -> Result<Self> {
        if series.is_empty() {
            return Err(HemodynError::EmptySeries);
        }

        let systolic = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let diastolic = series.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = series.iter().sum::<f64>() / series.len() as f64;

        Ok(Self {
            systolic,
            diastolic,
            mean,
            pulse: systolic - diastolic,
        })
    }

    /// Aortic pressure metrics over the final cycle of a trajectory.
    pub fn final_cycle(trajectory: &Trajectory) -> Result<Self> {
        let range = trajectory.last_cycle_range()?;
        Self::from_series(&trajectory.range_series(Compartment::Aorta, range))
    }

    /// Metrics of any state entry over cycle `cycle` (0-based).
    pub fn for_cycle(
        trajectory: &Trajectory,
        compartment: Compartment,
        cycle: usize,
    ) -> Result<Self> {
        let series = trajectory.cycle_series(compartment, cycle)?;
        Self::from_series(&series)
    }
}

/// Metrics of every state entry over one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleStatistics {
    /// 0-based cycle index
    pub cycle: usize,
    /// One entry per compartment, in state-vector order
    pub entries: Vec<(Compartment, PressureMetrics)>,
}

impl CycleStatistics {
    /// Compute statistics of all five entries for `cycle`.
    pub fn for_cycle(trajectory: &Trajectory, cycle: usize) -> Result<Self> {
        let entries = Compartment::ALL
            .iter()
            .map(|&c| PressureMetrics::for_cycle(trajectory, c, cycle).map(|m| (c, m)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cycle, entries })
    }

    /// Statistics of the final cycle.
    pub fn final_cycle(trajectory: &Trajectory) -> Result<Self> {
        Self::for_cycle(trajectory, trajectory.last_cycle()?)
    }

    /// Metrics of one entry.
    pub fn get(&self, compartment: Compartment) -> Option<&PressureMetrics> {
        self.entries
            .iter()
            .find(|(c, _)| *c == compartment)
            .map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateVector;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_series() {
        let m = PressureMetrics::from_series(&[80.0, 120.0, 100.0, 90.0]).unwrap();
        assert_eq!(m.systolic, 120.0);
        assert_eq!(m.diastolic, 80.0);
        assert_eq!(m.pulse, 40.0);
        assert_relative_eq!(m.mean, 97.5);
    }

    #[test]
    fn test_empty_series() {
        assert!(matches!(
            PressureMetrics::from_series(&[]),
            Err(HemodynError::EmptySeries)
        ));
    }

    #[test]
    fn test_constant_series() {
        let m = PressureMetrics::from_series(&[93.0; 10]).unwrap();
        assert_eq!(m.pulse, 0.0);
        assert_eq!(m.mean, 93.0);
    }

    #[test]
    fn test_final_cycle_uses_last_cycle() {
        let mut trajectory = Trajectory::zeros(4, 3, 0.1);
        for idx in 0..trajectory.len() {
            let v = idx as f64;
            trajectory.record(idx, &StateVector::new(0.0, 0.0, 0.0, 80.0 + v, 0.0));
        }

        let last = PressureMetrics::final_cycle(&trajectory).unwrap();
        assert_eq!(last, PressureMetrics::for_cycle(&trajectory, Compartment::Aorta, 2).unwrap());
        assert_eq!(last.diastolic, 88.0);
        assert_eq!(last.systolic, 91.0);

        let stats = CycleStatistics::final_cycle(&trajectory).unwrap();
        assert_eq!(stats.cycle, 2);
        assert_eq!(stats.get(Compartment::Aorta), Some(&last));
    }

    #[test]
    fn test_final_cycle_without_cycles() {
        let trajectory = Trajectory::zeros(4, 0, 0.1);
        assert!(matches!(
            PressureMetrics::final_cycle(&trajectory),
            Err(HemodynError::IncompleteCycle { .. })
        ));
        assert!(CycleStatistics::final_cycle(&trajectory).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn metrics_are_ordered(series in prop::collection::vec(-500.0_f64..500.0, 1..200)) {
                let m = PressureMetrics::from_series(&series).unwrap();
                let tol = 1e-9 * (1.0 + m.systolic.abs().max(m.diastolic.abs()));
                prop_assert!(m.systolic + tol >= m.mean);
                prop_assert!(m.mean + tol >= m.diastolic);
                prop_assert!(m.pulse >= 0.0);
            }
        }
    }
}
