//! WASM bindings for Hemodyn Core.
//!
//! This module provides JavaScript-friendly bindings for running the
//! circulation model in a web page and plotting the results there.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCirculationSim } from 'hemodyn_core';
//!
//! await init();
//!
//! const scenario = `
//!   heart_rate: 72
//!   cycles: 12
//! `;
//!
//! const sim = new WasmCirculationSim(scenario);
//! console.log(`${sim.systolic.toFixed(0)}/${sim.diastolic.toFixed(0)} mmHg`);
//! const aorta = sim.aortic_pressure_tail(2);
//! ```

use wasm_bindgen::prelude::*;

use crate::config;
use crate::error::HemodynError;
use crate::metrics::PressureMetrics;
use crate::model::Compartment;
use crate::solver::{SimulationResult, Simulator};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: HemodynError) -> JsValue {
    let wrapped = HemodynError::WasmError {
        message: e.to_string(),
    };
    JsValue::from_str(&wrapped.to_string())
}

/// A completed circulation run, exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmCirculationSim {
    result: SimulationResult,
    metrics: PressureMetrics,
}

#[wasm_bindgen]
impl WasmCirculationSim {
    /// Run a scenario given as YAML text (empty string = reference scenario).
    ///
    /// # Returns
    /// The finished run, or an error string if the scenario is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(scenario_yaml: &str) -> Result<WasmCirculationSim, JsValue> {
        let (params, x0) = config::parse(scenario_yaml)
            .and_then(|c| c.into_parts())
            .map_err(to_js)?;

        let simulator = Simulator::new(params).map_err(to_js)?;
        let result = simulator.run(&x0).map_err(to_js)?;
        let metrics = PressureMetrics::final_cycle(&result.trajectory).map_err(to_js)?;

        Ok(WasmCirculationSim { result, metrics })
    }

    /// Final-cycle systolic aortic pressure.
    #[wasm_bindgen(getter)]
    pub fn systolic(&self) -> f64 {
        self.metrics.systolic
    }

    /// Final-cycle diastolic aortic pressure.
    #[wasm_bindgen(getter)]
    pub fn diastolic(&self) -> f64 {
        self.metrics.diastolic
    }

    /// Final-cycle mean aortic pressure.
    #[wasm_bindgen(getter)]
    pub fn mean(&self) -> f64 {
        self.metrics.mean
    }

    /// Final-cycle pulse pressure.
    #[wasm_bindgen(getter)]
    pub fn pulse(&self) -> f64 {
        self.metrics.pulse
    }

    /// Integration step of the run.
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 {
        self.result.trajectory.dt()
    }

    /// Samples per cardiac cycle.
    #[wasm_bindgen(getter)]
    pub fn points_per_cycle(&self) -> usize {
        self.result.trajectory.points_per_cycle()
    }

    /// Full history of one state entry (0 = ventricle ... 4 = flow).
    ///
    /// Returns an empty array for an out-of-range index.
    #[wasm_bindgen]
    pub fn series(&self, index: usize) -> Vec<f64> {
        Compartment::ALL
            .get(index)
            .map(|&c| self.result.trajectory.series(c))
            .unwrap_or_default()
    }

    /// Aortic pressure over the last `cycles` beats.
    #[wasm_bindgen]
    pub fn aortic_pressure_tail(&self, cycles: usize) -> Vec<f64> {
        self.result
            .trajectory
            .tail(Compartment::Aorta, cycles)
            .into_iter()
            .map(|(_, p)| p)
            .collect()
    }

    /// Elastance over `cycles` beats, at most as many as were simulated.
    #[wasm_bindgen]
    pub fn elastance(&self, cycles: usize) -> Vec<f64> {
        let cycles = cycles.min(self.result.trajectory.cycles());
        self.result.elastance.tiled(cycles)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default valve sharpness.
#[wasm_bindgen]
pub fn default_valve_sharpness() -> f64 {
    crate::DEFAULT_VALVE_SHARPNESS
}
