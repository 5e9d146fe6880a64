//! Recorded simulation trajectory.

use std::ops::Range;

use nalgebra::Matrix5xX;

use crate::error::{HemodynError, Result};
use crate::model::{Compartment, StateVector};

/// Full state history of a run, shape `(5, points_per_cycle · cycles)`.
///
/// Column `idx` holds the state right after step `idx`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    data: Matrix5xX<f64>,
    points_per_cycle: usize,
    cycles: usize,
    dt: f64,
}

impl Trajectory {
    /// Allocate a zeroed trajectory.
    pub(crate) fn zeros(points_per_cycle: usize, cycles: usize, dt: f64) -> Self {
        Self {
            data: Matrix5xX::zeros(points_per_cycle * cycles),
            points_per_cycle,
            cycles,
            dt,
        }
    }

    /// Store the state produced by step `idx`.
    pub(crate) fn record(&mut self, idx: usize, x: &StateVector) {
        self.data.set_column(idx, x);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.data.ncols()
    }

    /// Whether the trajectory holds no steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per cardiac cycle.
    pub fn points_per_cycle(&self) -> usize {
        self.points_per_cycle
    }

    /// Number of simulated cycles.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Integration step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Time of column `idx`.
    pub fn time(&self, idx: usize) -> f64 {
        idx as f64 * self.dt
    }

    /// The raw `5 × N` matrix.
    pub fn matrix(&self) -> &Matrix5xX<f64> {
        &self.data
    }

    /// State after step `idx`.
    pub fn column(&self, idx: usize) -> Option<StateVector> {
        (idx < self.len()).then(|| self.data.column(idx).into_owned())
    }

    /// Last recorded state.
    pub fn final_state(&self) -> Option<StateVector> {
        self.len().checked_sub(1).and_then(|idx| self.column(idx))
    }

    /// Whole history of one state entry.
    pub fn series(&self, compartment: Compartment) -> Vec<f64> {
        self.data.row(compartment.index()).iter().copied().collect()
    }

    /// Column range covered by `cycle` (0-based).
    pub fn cycle_range(&self, cycle: usize) -> Result<Range<usize>> {
        if cycle >= self.cycles || self.points_per_cycle == 0 {
            return Err(HemodynError::IncompleteCycle {
                cycle,
                available: self.cycles,
            });
        }
        let start = cycle * self.points_per_cycle;
        Ok(start..start + self.points_per_cycle)
    }

    /// Index of the final completed cycle.
    pub fn last_cycle(&self) -> Result<usize> {
        self.cycles.checked_sub(1).ok_or(HemodynError::IncompleteCycle {
            cycle: 0,
            available: 0,
        })
    }

    /// Column range of the final completed cycle.
    pub fn last_cycle_range(&self) -> Result<Range<usize>> {
        self.cycle_range(self.last_cycle()?)
    }

    /// One state entry over one cycle.
    pub fn cycle_series(&self, compartment: Compartment, cycle: usize) -> Result<Vec<f64>> {
        let range = self.cycle_range(cycle)?;
        Ok(self.range_series(compartment, range))
    }

    /// One state entry over the last `cycles` cycles, with time stamps
    /// relative to the end of the run (negative, ending at `-dt`).
    pub fn tail(&self, compartment: Compartment, cycles: usize) -> Vec<(f64, f64)> {
        let n = cycles.saturating_mul(self.points_per_cycle).min(self.len());
        let start = self.len() - n;
        let row = compartment.index();
        (start..self.len())
            .map(|idx| {
                let offset = idx as isize - self.len() as isize;
                (offset as f64 * self.dt, self.data[(row, idx)])
            })
            .collect()
    }

    /// One state entry over an arbitrary column range.
    ///
    /// # Panics
    /// Panics if `range` reaches past the recorded steps.
    pub fn range_series(&self, compartment: Compartment, range: Range<usize>) -> Vec<f64> {
        let row = compartment.index();
        range.map(|idx| self.data[(row, idx)]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(points_per_cycle: usize, cycles: usize) -> Trajectory {
        let mut t = Trajectory::zeros(points_per_cycle, cycles, 0.1);
        for idx in 0..t.len() {
            let v = idx as f64;
            t.record(idx, &StateVector::new(v, v + 1.0, v + 2.0, v + 3.0, v + 4.0));
        }
        t
    }

    #[test]
    fn test_shape() {
        let t = ramp(4, 3);
        assert_eq!(t.len(), 12);
        assert_eq!(t.matrix().nrows(), 5);
        assert_eq!(t.matrix().ncols(), 12);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_cycle_ranges() {
        let t = ramp(4, 3);
        assert_eq!(t.cycle_range(0).unwrap(), 0..4);
        assert_eq!(t.last_cycle().unwrap(), 2);
        assert_eq!(t.last_cycle_range().unwrap(), 8..12);
        assert!(matches!(
            t.cycle_range(3),
            Err(HemodynError::IncompleteCycle { cycle: 3, available: 3 })
        ));
    }

    #[test]
    fn test_series_access() {
        let t = ramp(4, 3);
        assert_eq!(t.cycle_series(Compartment::Aorta, 1).unwrap(), vec![7.0, 8.0, 9.0, 10.0]);
        assert_eq!(t.series(Compartment::Ventricle).len(), 12);
        assert_eq!(t.range_series(Compartment::Flow, 10..12), vec![14.0, 15.0]);
        assert_eq!(t.final_state().unwrap()[4], 15.0);
        assert!(t.column(12).is_none());
    }

    #[test]
    fn test_tail_time_axis() {
        let t = ramp(4, 3);
        let tail = t.tail(Compartment::Ventricle, 2);
        assert_eq!(tail.len(), 8);
        assert!((tail[0].0 + 0.8).abs() < 1e-12);
        assert!((tail[7].0 + 0.1).abs() < 1e-12);
        assert_eq!(tail[7].1, 11.0);

        // Asking for more cycles than exist returns the whole history.
        assert_eq!(t.tail(Compartment::Flow, 10).len(), 12);
        assert_eq!(t.tail(Compartment::Flow, usize::MAX).len(), 12);
    }

    #[test]
    fn test_empty_trajectory() {
        let t = Trajectory::zeros(0, 0, 0.1);
        assert!(t.is_empty());
        assert!(t.final_state().is_none());
        assert!(t.last_cycle_range().is_err());
        assert!(matches!(
            t.last_cycle(),
            Err(HemodynError::IncompleteCycle { available: 0, .. })
        ));
    }
}
