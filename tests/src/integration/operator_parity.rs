//! # Operator Drive Parity
//!
//! The quasiperiodic operator is the single drive every subsystem consumes.
//! These tests pin the contract between its representations and consumers:
//!
//! 1. **Float vs fixed-point**: the Q16.16 form tracks the canonical `f64`
//!    form within its documented error bound.
//! 2. **qk-01 → qk-02**: the scalar dynamics reads exactly the operator the
//!    drive crate computes, at the step index the state reports.
//! 3. **Determinism**: identical inputs give bitwise-identical trajectories.

#[cfg(test)]
mod tests {
    use qk_01_operator::fixed::{fixed_operator_value, to_float};
    use qk_01_operator::{operator_value, operator_value_default, parity, phase_accumulator};
    use qk_02_dynamics::{DynamicsConfig, ScalarObservables, ScalarState};
    use shared_types::{GOLDEN_CONJUGATE, GOLDEN_RATIO};

    /// Documented absolute error bound of the fixed-point cosine.
    const FIXED_POINT_TOLERANCE: f64 = 2.1e-2;

    // =========================================================================
    // REPRESENTATION PARITY
    // =========================================================================

    #[test]
    fn test_fixed_point_tracks_float_operator() {
        let mut worst = 0.0f64;
        for n in 0..5_000u64 {
            let float = operator_value_default(n);
            let fixed = to_float(fixed_operator_value(n, 0));
            let err = (float - fixed).abs();
            if err > worst {
                worst = err;
            }
            assert!(
                err <= FIXED_POINT_TOLERANCE,
                "fixed-point diverged at n = {}: float {} vs fixed {} (err {})",
                n,
                float,
                fixed,
                err
            );
        }
        // The bound must be doing real work, not trivially slack.
        assert!(worst > 1e-6, "suspiciously exact agreement: {}", worst);
    }

    #[test]
    fn test_operator_factors_compose() {
        // O(n) = (-1)^n · cos(π·φ'·n + δ), assembled from the public pieces.
        for n in 0..1_000u64 {
            for &delta in &[0.0, 0.18, 2.5] {
                let composed = parity(n) * (phase_accumulator(n, GOLDEN_CONJUGATE) + delta).cos();
                assert_eq!(composed, operator_value(n, GOLDEN_CONJUGATE, delta));
            }
        }
    }

    #[test]
    fn test_golden_pair_is_consistent() {
        // φ' = φ - 1 = 1/φ: both identities must hold to double precision.
        assert!((GOLDEN_RATIO - 1.0 - GOLDEN_CONJUGATE).abs() < 1e-15);
        assert!((GOLDEN_RATIO * GOLDEN_CONJUGATE - 1.0).abs() < 1e-15);
    }

    // =========================================================================
    // CROSS-CRATE CONSUMPTION
    // =========================================================================

    #[test]
    fn test_dynamics_reads_the_shared_drive() {
        let config = DynamicsConfig::default();
        let mut state = ScalarState::new();
        for _ in 0..257 {
            state.advance(&config);
            assert_eq!(
                state.operator_value,
                operator_value(state.step_index, config.phi, state.phase_offset),
                "state and drive disagree at step {}",
                state.step_index
            );
        }
    }

    #[test]
    fn test_observables_report_the_drive_phase() {
        let config = DynamicsConfig::default();
        let mut state = ScalarState::new();
        for _ in 0..100 {
            state.advance(&config);
        }
        let obs = ScalarObservables::compute(&state, &config);
        assert_eq!(
            obs.phase_accumulator,
            phase_accumulator(state.step_index, config.phi)
        );
    }

    // =========================================================================
    // DETERMINISM
    // =========================================================================

    #[test]
    fn test_trajectories_are_bitwise_reproducible() {
        let config = DynamicsConfig::default();
        let mut a = ScalarState::with_phase_offset(0.18);
        let mut b = ScalarState::with_phase_offset(0.18);
        for _ in 0..5_000 {
            a.advance(&config);
            b.advance(&config);
        }
        // PartialEq on the state compares every f64 field exactly.
        assert_eq!(a, b);
    }
}
