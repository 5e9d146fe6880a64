//! Lumped model parameters.

use crate::{DEFAULT_VALVE_SHARPNESS, SECONDS_PER_MINUTE};

/// Initial state of the reference scenario (mmHg for pressures, ml/s for flow).
pub const REFERENCE_INITIAL_STATE: [f64; 5] = [8.0, 7.3, 70.0, 75.0, 20.0];

/// Parameters of one simulation run.
///
/// Units follow the usual hemodynamic convention: pressures in mmHg,
/// volumes in ml, time in seconds. Resistances are in mmHg·s/ml,
/// compliances in ml/mmHg and the inertance in mmHg·s²/ml.
///
/// The struct is plain data; call [`validate_params`](super::validate_params)
/// (or construct a [`Simulator`](crate::Simulator), which does it for you)
/// before using it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// Systemic (atrium to arteries) resistance
    pub r1: f64,
    /// Inflow valve resistance (atrium to ventricle)
    pub r2: f64,
    /// Outflow valve resistance (ventricle to aorta)
    pub r3: f64,
    /// Characteristic resistance of the inductive branch
    pub r4: f64,
    /// Atrial / root compliance
    pub c2: f64,
    /// Arterial compliance
    pub c3: f64,
    /// Aortic compliance
    pub c4: f64,
    /// Inertance of the aortic flow branch
    pub inductance: f64,
    /// Integration step (s)
    pub dt: f64,
    /// Heart rate (beats per minute)
    pub heart_rate: f64,
    /// Diastolic (minimum) ventricular elastance
    pub elastance_min: f64,
    /// Systolic (maximum) ventricular elastance
    pub elastance_max: f64,
    /// Number of simulated cardiac cycles
    pub cycles: usize,
    /// Sharpness `k` of the smoothed valve switching
    pub valve_sharpness: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::reference()
    }
}

impl ModelParams {
    /// The reference adult configuration.
    pub fn reference() -> Self {
        Self {
            r1: 1.0,
            r2: 0.005,
            r3: 0.013,
            r4: 0.0398,
            c2: 4.4,
            c3: 1.33,
            c4: 0.8,
            inductance: 0.0005,
            dt: 0.01,
            heart_rate: 75.0,
            elastance_min: 0.05,
            elastance_max: 2.0,
            cycles: 10,
            valve_sharpness: DEFAULT_VALVE_SHARPNESS,
        }
    }

    /// Set the four resistances.
    pub fn with_resistances(mut self, r1: f64, r2: f64, r3: f64, r4: f64) -> Self {
        self.r1 = r1;
        self.r2 = r2;
        self.r3 = r3;
        self.r4 = r4;
        self
    }

    /// Set the three compliances.
    pub fn with_compliances(mut self, c2: f64, c3: f64, c4: f64) -> Self {
        self.c2 = c2;
        self.c3 = c3;
        self.c4 = c4;
        self
    }

    /// Set the inertance of the flow branch.
    pub fn with_inductance(mut self, inductance: f64) -> Self {
        self.inductance = inductance;
        self
    }

    /// Set the integration step.
    ///
    /// Forward Euler is only conditionally stable; `dt` has to stay small
    /// relative to the fastest time constant (mostly `L / R4`).
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the heart rate in beats per minute.
    pub fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = heart_rate;
        self
    }

    /// Set the elastance range.
    pub fn with_elastance(mut self, min: f64, max: f64) -> Self {
        self.elastance_min = min;
        self.elastance_max = max;
        self
    }

    /// Set the number of simulated cycles.
    pub fn with_cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the valve sharpness constant.
    pub fn with_valve_sharpness(mut self, sharpness: f64) -> Self {
        self.valve_sharpness = sharpness;
        self
    }

    /// Duration of one heartbeat in seconds.
    pub fn cycle_duration(&self) -> f64 {
        SECONDS_PER_MINUTE / self.heart_rate
    }

    /// Number of samples in one cycle, `floor(60 / HR / dt)`.
    pub fn points_per_cycle(&self) -> usize {
        let points = (SECONDS_PER_MINUTE / self.heart_rate / self.dt).floor();
        if points.is_finite() && points > 0.0 {
            points as usize
        } else {
            0
        }
    }

    /// Total number of integration steps over all cycles, saturating at
    /// `usize::MAX`.
    pub fn total_points(&self) -> usize {
        self.points_per_cycle().saturating_mul(self.cycles)
    }

    /// Named view of every floating-point parameter, in declaration order.
    pub(crate) fn named_values(&self) -> [(&'static str, f64); 13] {
        [
            ("r1", self.r1),
            ("r2", self.r2),
            ("r3", self.r3),
            ("r4", self.r4),
            ("c2", self.c2),
            ("c3", self.c3),
            ("c4", self.c4),
            ("inductance", self.inductance),
            ("dt", self.dt),
            ("heart_rate", self.heart_rate),
            ("elastance_min", self.elastance_min),
            ("elastance_max", self.elastance_max),
            ("valve_sharpness", self.valve_sharpness),
        ]
    }
}
