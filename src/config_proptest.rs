//! Property-based tests for configuration resolution and matrix expansion.
//!
//! These tests use proptest to generate arbitrary signal sets and verify that
//! invariants hold for every combination.

#[cfg(test)]
mod proptest_tests {
    use crate::config::ExecutionConfig;
    use crate::matrix::{FeatureMatrix, BASE_FEATURES, FREESTANDING_BASE_FEATURES, PAIRINGS};
    use crate::runner::PlanRecorder;
    use crate::phases::executor::{PhaseExecutor, Toolchain};
    use crate::signals::{self, Signals};
    use proptest::prelude::*;
    use std::path::Path;

    /// Arbitrary subset of the recognised signals, each with arbitrary
    /// content (possibly empty).
    fn arb_signals() -> impl Strategy<Value = Signals> {
        proptest::collection::vec(
            (proptest::sample::select(signals::ALL.to_vec()), "[a-z0-9._-]{0,8}"),
            0..signals::ALL.len(),
        )
        .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        /// Property: resolution is deterministic
        #[test]
        fn resolve_is_deterministic(signals in arb_signals()) {
            let first = ExecutionConfig::resolve(&signals);
            let second = ExecutionConfig::resolve(&signals.clone());
            prop_assert_eq!(first, second);
        }

        /// Property: `std` is required iff NO_STD is unset
        #[test]
        fn std_required_iff_hosted(signals in arb_signals()) {
            let config = ExecutionConfig::resolve(&signals);
            prop_assert_eq!(
                config.required_features.contains("std"),
                !signals.is_set(signals::NO_STD)
            );
            prop_assert_eq!(
                config.required_features.contains("property_tests"),
                !signals.is_set(signals::DISABLE_PROPERTY_TESTS)
            );
            prop_assert_eq!(
                config.required_features.contains("libm"),
                signals.is_set(signals::ENABLE_LIBM)
            );
        }

        /// Property: the core list has three entries per base valid for the mode
        #[test]
        fn matrix_size_matches_mode(signals in arb_signals()) {
            let config = ExecutionConfig::resolve(&signals);
            let matrix = FeatureMatrix::build(&config);

            let expected = if signals.is_set(signals::NO_FEATURES) {
                0
            } else if signals.is_set(signals::NO_STD) {
                FREESTANDING_BASE_FEATURES.len() * PAIRINGS.len()
            } else {
                BASE_FEATURES.len() * PAIRINGS.len()
            };
            prop_assert_eq!(matrix.core.len(), expected);
            prop_assert!(matrix.bindings.is_empty());
            prop_assert!(matrix.codegen.is_empty());
        }

        /// Property: DISABLE_TESTS silences both test and bench phases
        #[test]
        fn disabled_tests_issue_nothing(signals in arb_signals()) {
            let signals = signals.with(signals::DISABLE_TESTS, "1");
            let config = ExecutionConfig::resolve(&signals);
            let matrix = FeatureMatrix::build(&config);
            let toolchain = Toolchain::default();
            let executor = PhaseExecutor::new(&config, &toolchain, Path::new("."));
            let mut recorder = PlanRecorder::new();

            executor.run_test(&mut recorder, &matrix.core).unwrap();
            executor.run_bench(&mut recorder, &matrix.core).unwrap();
            prop_assert!(recorder.invocations().is_empty());
        }

        /// Property: build always issues exactly two invocations
        #[test]
        fn build_issues_two_invocations(signals in arb_signals()) {
            let config = ExecutionConfig::resolve(&signals);
            let toolchain = Toolchain::default();
            let executor = PhaseExecutor::new(&config, &toolchain, Path::new("."));
            let mut recorder = PlanRecorder::new();

            executor.run_build(&mut recorder).unwrap();
            prop_assert_eq!(recorder.invocations().len(), 2);
            prop_assert!(!recorder.invocations()[0].release);
            prop_assert!(recorder.invocations()[1].release);
        }
    }
}
