//! Main simulator interface.

use tracing::{debug, info, warn};

use crate::components::ElastanceWaveform;
use crate::error::{HemodynError, Result};
use crate::metrics::PressureMetrics;
use crate::model::{state_from_slice, validate_params, Compartment, ModelParams, StateVector};

use super::operator::StateOperator;
use super::stability::{amplification_factor, is_non_amplifying};
use super::trajectory::Trajectory;

/// Configuration for the simulator.
///
/// The defaults reproduce the plain forward-Euler recursion: no guard, no
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SimulatorConfig {
    /// Abort when any state entry leaves `[-limit, limit]` or becomes non-finite.
    pub divergence_limit: Option<f64>,
    /// Record the peak step amplification factor over the run.
    pub track_stability: bool,
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort runs whose state magnitude exceeds `limit`.
    pub fn with_divergence_limit(mut self, limit: f64) -> Self {
        self.divergence_limit = Some(limit);
        self
    }

    /// Track the spectral radius of every Euler step.
    ///
    /// This costs one 5×5 eigenvalue decomposition per step.
    pub fn with_stability_tracking(mut self, enabled: bool) -> Self {
        self.track_stability = enabled;
        self
    }
}

/// Output of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Full state history
    pub trajectory: Trajectory,
    /// The single-cycle elastance waveform that drove the run
    pub elastance: ElastanceWaveform,
    /// Peak spectral radius of `I + dt·A`, when tracked
    pub peak_amplification: Option<f64>,
}

impl SimulationResult {
    /// Aortic pressure metrics over the final cycle.
    pub fn final_cycle_metrics(&self) -> Result<PressureMetrics> {
        PressureMetrics::final_cycle(&self.trajectory)
    }
}

/// The circulation simulator: forward-Euler integration of `dx/dt = A(x, t)·x`.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: ModelParams,
    operator: StateOperator,
    waveform: ElastanceWaveform,
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with default configuration.
    pub fn new(params: ModelParams) -> Result<Self> {
        Self::with_config(params, SimulatorConfig::default())
    }

    /// Create a new simulator with custom configuration.
    ///
    /// Validates the parameters and generates the elastance waveform once.
    pub fn with_config(params: ModelParams, config: SimulatorConfig) -> Result<Self> {
        validate_params(&params)?;

        let operator = StateOperator::new(&params);
        let waveform = ElastanceWaveform::generate(
            params.elastance_min,
            params.elastance_max,
            params.heart_rate,
            params.dt,
        );

        Ok(Self {
            params,
            operator,
            waveform,
            config,
        })
    }

    /// The parameters of this simulator.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// One forward-Euler step from `x` at global sample `idx`.
    pub fn step(&self, x: &StateVector, idx: usize) -> StateVector {
        let a = self.operator.assemble(x, self.waveform.at(idx));
        x + (a * x) * self.params.dt
    }

    /// Run the simulation from a slice, checking its length first.
    pub fn run_from_slice(&self, initial: &[f64]) -> Result<SimulationResult> {
        let x0 = state_from_slice(initial)?;
        self.run(&x0)
    }

    /// Run all cycles from `initial` and record every step.
    pub fn run(&self, initial: &StateVector) -> Result<SimulationResult> {
        let points_per_cycle = self.waveform.points_per_cycle();
        let cycles = self.params.cycles;
        let dt = self.params.dt;

        info!(
            cycles,
            points_per_cycle,
            dt,
            heart_rate = self.params.heart_rate,
            "starting circulation run"
        );

        let mut trajectory = Trajectory::zeros(points_per_cycle, cycles, dt);
        let mut peak_amplification: Option<f64> = None;
        let mut x = *initial;

        for cycle in 0..cycles {
            for i in 0..points_per_cycle {
                let idx = cycle * points_per_cycle + i;
                let a = self.operator.assemble(&x, self.waveform.at(idx));

                if self.config.track_stability {
                    let factor = amplification_factor(&a, dt);
                    peak_amplification = Some(peak_amplification.map_or(factor, |p| p.max(factor)));
                }

                x += (a * x) * dt;

                if let Some(limit) = self.config.divergence_limit {
                    check_divergence(&x, idx, limit)?;
                }

                trajectory.record(idx, &x);
            }

            debug!(
                cycle,
                aorta = x[Compartment::Aorta.index()],
                ventricle = x[Compartment::Ventricle.index()],
                "cycle complete"
            );
        }

        if let Some(peak) = peak_amplification {
            if !is_non_amplifying(peak) {
                warn!(peak, "forward-Euler step amplifies some mode; consider a smaller dt");
            }
        }

        Ok(SimulationResult {
            trajectory,
            elastance: self.waveform.clone(),
            peak_amplification,
        })
    }
}

fn check_divergence(x: &StateVector, step: usize, limit: f64) -> Result<()> {
    for compartment in Compartment::ALL {
        let value = x[compartment.index()];
        if !value.is_finite() || value.abs() > limit {
            warn!(%compartment, step, value, "state diverged");
            return Err(HemodynError::NumericalOverflow {
                variable: compartment.name().to_string(),
                step,
                value,
            });
        }
    }
    Ok(())
}
