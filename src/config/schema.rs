//! Serializable scenario description.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{
    state_from_slice, validate_params, ModelParams, StateVector, REFERENCE_INITIAL_STATE,
};

/// The four resistances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResistanceDef {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub r4: f64,
}

impl Default for ResistanceDef {
    fn default() -> Self {
        let p = ModelParams::reference();
        Self {
            r1: p.r1,
            r2: p.r2,
            r3: p.r3,
            r4: p.r4,
        }
    }
}

/// The three compliances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceDef {
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
}

impl Default for ComplianceDef {
    fn default() -> Self {
        let p = ModelParams::reference();
        Self {
            c2: p.c2,
            c3: p.c3,
            c4: p.c4,
        }
    }
}

/// Ventricular elastance range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ElastanceDef {
    pub min: f64,
    pub max: f64,
}

impl Default for ElastanceDef {
    fn default() -> Self {
        let p = ModelParams::reference();
        Self {
            min: p.elastance_min,
            max: p.elastance_max,
        }
    }
}

/// A complete scenario: model parameters plus the initial state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub resistances: ResistanceDef,
    pub compliances: ComplianceDef,
    pub inductance: f64,
    pub dt: f64,
    pub heart_rate: f64,
    pub elastance: ElastanceDef,
    pub cycles: usize,
    pub valve_sharpness: f64,
    /// Kept as a list so a wrong length is reported, not silently truncated
    pub initial_state: Vec<f64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_params(&ModelParams::reference(), &REFERENCE_INITIAL_STATE)
    }
}

impl ScenarioConfig {
    /// Describe existing parameters and an initial state.
    pub fn from_params(params: &ModelParams, initial_state: &[f64]) -> Self {
        Self {
            resistances: ResistanceDef {
                r1: params.r1,
                r2: params.r2,
                r3: params.r3,
                r4: params.r4,
            },
            compliances: ComplianceDef {
                c2: params.c2,
                c3: params.c3,
                c4: params.c4,
            },
            inductance: params.inductance,
            dt: params.dt,
            heart_rate: params.heart_rate,
            elastance: ElastanceDef {
                min: params.elastance_min,
                max: params.elastance_max,
            },
            cycles: params.cycles,
            valve_sharpness: params.valve_sharpness,
            initial_state: initial_state.to_vec(),
        }
    }

    /// Model parameters described by this scenario, unvalidated.
    pub fn params(&self) -> ModelParams {
        ModelParams {
            r1: self.resistances.r1,
            r2: self.resistances.r2,
            r3: self.resistances.r3,
            r4: self.resistances.r4,
            c2: self.compliances.c2,
            c3: self.compliances.c3,
            c4: self.compliances.c4,
            inductance: self.inductance,
            dt: self.dt,
            heart_rate: self.heart_rate,
            elastance_min: self.elastance.min,
            elastance_max: self.elastance.max,
            cycles: self.cycles,
            valve_sharpness: self.valve_sharpness,
        }
    }

    /// Validated parameters and initial state.
    pub fn into_parts(self) -> Result<(ModelParams, StateVector)> {
        let params = self.params();
        validate_params(&params)?;
        let x0 = state_from_slice(&self.initial_state)?;
        Ok((params, x0))
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
