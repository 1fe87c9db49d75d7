// tests/integration_tests/properties_test.rs
//! Property tests for the policy, checked against the plain ratio definitions.
use proptest::prelude::*;
use sib::{
    AttendanceState, ClassesToTarget, InvalidInput, SafeBunks, analyze, simulate_one_miss,
};

const FULL: u128 = 1_000_000;

/// `attended / held >= minimum` with the minimum given in hundredths of a
/// percent, compared without division.
fn meets(attended: u64, held: u64, hundredths: u32) -> bool {
    u128::from(attended) * FULL >= u128::from(hundredths) * 100 * u128::from(held)
}

fn percent(hundredths: u32) -> f64 {
    f64::from(hundredths) / 100.0
}

/// (held, attended, minimum in hundredths of a percent)
fn arb_inputs() -> impl Strategy<Value = (u64, u64, u32)> {
    (0u64..=400)
        .prop_flat_map(|held| (Just(held), 0..=held, 0u32..=10_000))
}

proptest! {
    #[test]
    fn safe_and_target_are_exclusive((held, attended, hundredths) in arb_inputs()) {
        let analysis = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        if analysis.is_safe {
            prop_assert_eq!(analysis.classes_to_target, ClassesToTarget::Reachable(0));
        } else {
            prop_assert_eq!(analysis.safe_bunks, SafeBunks::Limited(0));
        }
    }

    #[test]
    fn verdict_matches_exact_ratio((held, attended, hundredths) in arb_inputs()) {
        prop_assume!(held > 0);
        let analysis = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        prop_assert_eq!(analysis.is_safe, meets(attended, held, hundredths));
    }

    #[test]
    fn safe_bunks_is_the_last_safe_miss((held, attended, hundredths) in arb_inputs()) {
        prop_assume!(held > 0 && hundredths > 0);
        let analysis = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        prop_assume!(analysis.is_safe);

        let n = analysis.safe_bunks.count().unwrap();
        prop_assert!(meets(attended, held + n, hundredths));
        prop_assert!(!meets(attended, held + n + 1, hundredths));
        // every smaller number of misses is safe as well
        for k in 0..n.min(64) {
            prop_assert!(meets(attended, held + k, hundredths));
        }
    }

    #[test]
    fn classes_to_target_is_the_first_recovery((held, attended, hundredths) in arb_inputs()) {
        prop_assume!(held > 0 && hundredths < 10_000);
        let analysis = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        prop_assume!(!analysis.is_safe);

        let m = analysis.classes_to_target.count().unwrap();
        prop_assert!(m > 0);
        prop_assert!(meets(attended + m, held + m, hundredths));
        prop_assert!(!meets(attended + m - 1, held + m - 1, hundredths));
    }

    #[test]
    fn attending_more_needs_fewer_classes((held, attended, hundredths) in arb_inputs()) {
        prop_assume!(attended < held && hundredths < 10_000);
        let before = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        let better = analyze(held as i64, attended as i64 + 1, percent(hundredths)).unwrap();

        let before = before.classes_to_target.count().unwrap();
        let better = better.classes_to_target.count().unwrap();
        if before > 0 {
            prop_assert!(better < before);
        } else {
            prop_assert_eq!(better, 0);
        }
    }

    #[test]
    fn full_minimum_with_a_miss_is_unreachable(held in 1u64..=400, missed in 1u64..=400) {
        prop_assume!(missed <= held);
        let analysis = analyze(held as i64, (held - missed) as i64, 100.0).unwrap();
        prop_assert!(!analysis.is_safe);
        prop_assert_eq!(analysis.classes_to_target, ClassesToTarget::Unreachable);
    }

    #[test]
    fn analysis_is_idempotent((held, attended, hundredths) in arb_inputs()) {
        let first = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        let second = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            first.current_percentage.to_bits(),
            second.current_percentage.to_bits()
        );
    }

    #[test]
    fn one_miss_is_one_more_held_class((held, attended, hundredths) in arb_inputs()) {
        let state = AttendanceState::new(held as i64, attended as i64, percent(hundredths)).unwrap();
        let expected = analyze(held as i64 + 1, attended as i64, percent(hundredths)).unwrap();
        prop_assert_eq!(simulate_one_miss(&state), expected);
    }

    #[test]
    fn rounded_percentage_is_within_half_a_tenth((held, attended, hundredths) in arb_inputs()) {
        prop_assume!(held > 0);
        let analysis = analyze(held as i64, attended as i64, percent(hundredths)).unwrap();
        let exact = attended as f64 / held as f64 * 100.0;
        prop_assert!((analysis.current_percentage - exact).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn any_minimum_is_used_exactly_or_refused(
        held in 0i64..=400,
        minimum in 0.0f64..=100.0,
    ) {
        match AttendanceState::new(held, 0, minimum) {
            Ok(state) => {
                prop_assert_eq!(state.threshold() as f64 / 10_000.0, minimum);
            }
            Err(error) => {
                prop_assert_eq!(
                    error,
                    InvalidInput::TooPrecise { field: "minimum percentage", value: minimum }
                );
            }
        }
    }
}
