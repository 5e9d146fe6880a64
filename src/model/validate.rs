//! Parameter validation.

use std::mem::size_of;

use crate::error::{HemodynError, Result};

use super::{ModelParams, STATE_DIM};

/// Bytes of trajectory storage per recorded step.
const BYTES_PER_STEP: usize = STATE_DIM * size_of::<f64>();

/// Validate parameters for simulation.
///
/// Checks:
/// - Every floating-point parameter is finite and strictly positive
/// - Elastance bounds are ordered (`min < max`)
/// - At least one cycle is requested
/// - At least one sample fits in a cycle
/// - The whole trajectory fits in addressable memory
///
/// Step stability is not checked here; see [`crate::solver::stability`].
pub fn validate_params(params: &ModelParams) -> Result<()> {
    for (name, value) in params.named_values() {
        if !value.is_finite() {
            return Err(HemodynError::non_finite(name, value));
        }
        if value <= 0.0 {
            return Err(HemodynError::non_positive(name, value));
        }
    }

    if params.elastance_min >= params.elastance_max {
        return Err(HemodynError::InvalidElastanceBounds {
            min: params.elastance_min,
            max: params.elastance_max,
        });
    }

    if params.cycles < 1 {
        return Err(HemodynError::InvalidCycleCount {
            cycles: params.cycles,
        });
    }

    if params.points_per_cycle() == 0 {
        return Err(HemodynError::EmptyCycle {
            heart_rate: params.heart_rate,
            dt: params.dt,
        });
    }

    let storable = params
        .points_per_cycle()
        .checked_mul(params.cycles)
        .and_then(|steps| steps.checked_mul(BYTES_PER_STEP))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !storable {
        return Err(HemodynError::RunTooLong {
            points_per_cycle: params.points_per_cycle(),
            cycles: params.cycles,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_valid() {
        assert!(validate_params(&ModelParams::reference()).is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        let params = ModelParams::reference().with_resistances(1.0, 0.0, 0.013, 0.0398);
        match validate_params(&params) {
            Err(HemodynError::NonPositiveParameter { param, .. }) => assert_eq!(param, "r2"),
            other => panic!("unexpected result: {other:?}"),
        }

        let params = ModelParams::reference().with_inductance(-1.0);
        assert!(matches!(
            validate_params(&params),
            Err(HemodynError::NonPositiveParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let params = ModelParams::reference().with_compliances(4.4, f64::INFINITY, 0.8);
        match validate_params(&params) {
            Err(HemodynError::NonFiniteParameter { param, .. }) => assert_eq!(param, "c3"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unordered_elastance() {
        let params = ModelParams::reference().with_elastance(2.0, 2.0);
        assert!(matches!(
            validate_params(&params),
            Err(HemodynError::InvalidElastanceBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_cycles() {
        let params = ModelParams::reference().with_cycles(0);
        assert!(matches!(
            validate_params(&params),
            Err(HemodynError::InvalidCycleCount { cycles: 0 })
        ));
    }

    #[test]
    fn test_rejects_empty_cycle() {
        let params = ModelParams::reference().with_dt(1.0);
        let err = validate_params(&params).unwrap_err();
        assert!(matches!(err, HemodynError::EmptyCycle { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_overlong_run() {
        for cycles in [usize::MAX, usize::MAX / 10, usize::MAX / 80] {
            let params = ModelParams::reference().with_cycles(cycles);
            let err = validate_params(&params).unwrap_err();
            assert!(matches!(err, HemodynError::RunTooLong { points_per_cycle: 80, .. }));
            assert!(err.is_configuration());
        }
    }
}
