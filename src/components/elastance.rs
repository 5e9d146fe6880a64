//! Time-varying ventricular elastance.
//!
//! The ventricle is driven by a "double Hill" activation curve:
//!
//! ```text
//!            (tn/a)^m1                 1
//! En = K · ────────────── · ───────────────────
//!          1 + (tn/a)^m1     1 + (tn/b)^m2
//! ```
//!
//! with `tn = t / (0.2 + 0.15·T)` (T the cycle duration), rise exponent
//! `m1 = 1.9`, relaxation exponent `m2 = 21.9`, half-activation `a = 0.7`,
//! relaxation onset `b = 1.17` and `K = 1.55` scaling the peak to ~1.
//! `En` is then mapped to `[Umin, Umax]`.
//!
//! Only one cycle is stored. Every lookup wraps the global sample index
//! modulo the cycle length, so the waveform is exactly periodic.

use crate::SECONDS_PER_MINUTE;

/// Steepness of the activation (rising) limb.
pub const ACTIVATION_EXPONENT: f64 = 1.9;
/// Steepness of the relaxation (falling) limb.
pub const RELAXATION_EXPONENT: f64 = 21.9;
/// Normalized time of half activation.
pub const HALF_ACTIVATION: f64 = 0.7;
/// Normalized time at which relaxation sets in.
pub const RELAXATION_ONSET: f64 = 1.17;
/// Peak normalization of the curve.
pub const NORMALIZATION: f64 = 1.55;
/// Minimal myocardial activation time (s).
pub const ACTIVATION_BASE_TIME: f64 = 0.2;
/// Share of the cycle duration added to the activation time.
pub const ACTIVATION_CYCLE_FRACTION: f64 = 0.15;

/// Normalized elastance at normalized time `tn`.
pub fn normalized_elastance(tn: f64) -> f64 {
    let rise = (tn / HALF_ACTIVATION).powf(ACTIVATION_EXPONENT);
    let relax = (tn / RELAXATION_ONSET).powf(RELAXATION_EXPONENT);
    NORMALIZATION * rise / ((1.0 + rise) * (1.0 + relax))
}

/// Elastance and its discrete derivatives at one sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElastanceSample {
    /// Elastance `U`
    pub elastance: f64,
    /// Backward difference `dU = (U[i] - U[i-1]) / dt`
    pub derivative: f64,
    /// Log-derivative helper `h = dU / U[i-1]`
    pub log_derivative: f64,
}

/// One cycle of the elastance waveform with periodic lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ElastanceWaveform {
    elastance: Vec<f64>,
    derivative: Vec<f64>,
    log_derivative: Vec<f64>,
    dt: f64,
}

impl ElastanceWaveform {
    /// Generate one cycle.
    ///
    /// # Arguments
    /// * `min`, `max` - Elastance bounds
    /// * `heart_rate` - Beats per minute
    /// * `dt` - Sampling step (s)
    ///
    /// The cycle holds `floor(60 / heart_rate / dt)` samples. Inputs are
    /// expected to be validated; a non-positive sample count yields an
    /// empty waveform.
    pub fn generate(min: f64, max: f64, heart_rate: f64, dt: f64) -> Self {
        let duration = SECONDS_PER_MINUTE / heart_rate;
        let raw = (SECONDS_PER_MINUTE / heart_rate / dt).floor();
        let points = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };

        let mut elastance = vec![0.0; points];
        let mut derivative = vec![0.0; points];
        let mut log_derivative = vec![0.0; points];

        if points > 0 {
            elastance[0] = min;
        }

        // Sample times are spread evenly over [0, T - dt].
        let spacing = if points > 1 {
            (duration - dt) / (points - 1) as f64
        } else {
            0.0
        };
        let time_scale = ACTIVATION_BASE_TIME + ACTIVATION_CYCLE_FRACTION * duration;

        for i in 1..points {
            let tn = (i as f64 * spacing) / time_scale;
            elastance[i] = (max - min) * normalized_elastance(tn) + min;

            derivative[i] = (elastance[i] - elastance[i - 1]) / dt;
            log_derivative[i] = if elastance[i - 1] != 0.0 {
                derivative[i] / elastance[i - 1]
            } else {
                0.0
            };
        }

        Self {
            elastance,
            derivative,
            log_derivative,
            dt,
        }
    }

    /// Samples per cycle.
    pub fn points_per_cycle(&self) -> usize {
        self.elastance.len()
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.elastance.is_empty()
    }

    /// Sampling step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Sample at global index `t`, wrapped into the stored cycle.
    ///
    /// # Panics
    /// Panics if the waveform is empty.
    pub fn at(&self, t: usize) -> ElastanceSample {
        let i = t % self.elastance.len();
        ElastanceSample {
            elastance: self.elastance[i],
            derivative: self.derivative[i],
            log_derivative: self.log_derivative[i],
        }
    }

    /// Elastance at global index `t`.
    pub fn elastance(&self, t: usize) -> f64 {
        self.at(t).elastance
    }

    /// Full-length `U` series for `cycles` beats, e.g. for plotting.
    pub fn tiled(&self, cycles: usize) -> Vec<f64> {
        self.elastance
            .iter()
            .copied()
            .cycle()
            .take(self.elastance.len().saturating_mul(cycles))
            .collect()
    }

    /// Largest sampled elastance.
    pub fn peak(&self) -> f64 {
        self.elastance.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sampled elastance.
    pub fn trough(&self) -> f64 {
        self.elastance.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Index of the peak within the cycle (end of ejection drive).
    pub fn peak_index(&self) -> usize {
        self.elastance
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best_i, best), (i, &u)| {
                if u > best {
                    (i, u)
                } else {
                    (best_i, best)
                }
            })
            .0
    }
}
