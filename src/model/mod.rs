//! Circulation model definition and validation.
//!
//! This module holds the immutable description of one simulation run:
//! the lumped [`ModelParams`] (resistances, compliances, inertance,
//! time base and elastance bounds) and the five-entry [`StateVector`]
//! whose layout is named by [`Compartment`].

mod params;
mod state;
mod validate;

pub use params::{ModelParams, REFERENCE_INITIAL_STATE};
pub use state::*;
pub use validate::validate_params;
