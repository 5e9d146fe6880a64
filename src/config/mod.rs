//! Scenario files.
//!
//! A scenario is a small YAML document describing one run. Every section
//! is optional; anything left out falls back to the reference adult
//! configuration.
//!
//! # Format
//!
//! ```yaml
//! resistances: { r1: 1.0, r2: 0.005, r3: 0.013, r4: 0.0398 }
//! compliances: { c2: 4.4, c3: 1.33, c4: 0.8 }
//! inductance: 0.0005
//! dt: 0.01
//! heart_rate: 75
//! elastance: { min: 0.05, max: 2.0 }
//! cycles: 10
//! valve_sharpness: 10
//! initial_state: [8.0, 7.3, 70.0, 75.0, 20.0]
//! ```
//!
//! | Key | Meaning | Unit |
//! |-----|---------|------|
//! | `resistances` | R1 systemic, R2 inflow valve, R3 outflow valve, R4 flow branch | mmHg·s/ml |
//! | `compliances` | C2 atrium, C3 arteries, C4 aorta | ml/mmHg |
//! | `inductance` | inertance of the flow branch | mmHg·s²/ml |
//! | `dt` | integration step | s |
//! | `heart_rate` | beats per minute | 1/min |
//! | `elastance` | ventricular elastance range | mmHg/ml |
//! | `cycles` | number of simulated beats | - |
//! | `valve_sharpness` | logistic valve constant `k` | 1/mmHg |
//! | `initial_state` | x1..x5 (four pressures, one flow) | mmHg, ml/s |

mod schema;

pub use schema::*;

use crate::error::Result;

/// Parse a scenario from a YAML string.
pub fn parse(input: &str) -> Result<ScenarioConfig> {
    if input.trim().is_empty() {
        return Ok(ScenarioConfig::default());
    }
    Ok(serde_yaml::from_str(input)?)
}

/// Parse a scenario file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<ScenarioConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::HemodynError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
