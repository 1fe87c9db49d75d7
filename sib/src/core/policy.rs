// src/core/policy.rs
//! The attendance policy calculator.
//!
//! A subject is safe when `attended / held >= minimum / 100`. Every such
//! comparison is made on cross-multiplied integers in threshold units
//! (`attended * FULL_ATTENDANCE >= threshold * held`), so a percentage sitting
//! exactly on the minimum is always safe and never flips on float noise.
//!
//! Both projections are closed forms of a monotone predicate:
//!
//! * missing `k` more classes keeps the subject safe iff
//!   `attended * FULL >= threshold * (held + k)`, which only gets harder as `k`
//!   grows, so the safe `k` form a prefix `0..=n` with
//!   `n = floor(attended * FULL / threshold) - held`;
//! * attending `m` more classes in a row reaches the minimum iff
//!   `(attended + m) * FULL >= threshold * (held + m)`, i.e.
//!   `m * (FULL - threshold) >= threshold * held - attended * FULL`, which only
//!   gets easier as `m` grows while `threshold < FULL`.
//!
//! Nothing here loops, so every call terminates.

use crate::error::InvalidInput;
use crate::models::{
    AttendanceAnalysis, AttendanceState, ClassesToTarget, FULL_ATTENDANCE, SafeBunks, Standing,
};

/// Analyses raw counts.
///
/// # Errors
///
/// Returns [`InvalidInput`] if a count is negative, attended exceeds held, or
/// the minimum is outside `0..=100`.
///
/// # Examples
///
/// ```
/// let analysis = sib::analyze(25, 22, 75.0)?;
/// assert!(analysis.is_safe);
/// assert_eq!(analysis.current_percentage, 88.0);
/// assert_eq!(analysis.safe_bunks.count(), Some(4));
/// # Ok::<(), sib::InvalidInput>(())
/// ```
#[inline]
pub fn analyze(
    total_held: i64,
    total_attended: i64,
    minimum_percent: f64,
) -> Result<AttendanceAnalysis, InvalidInput> {
    AttendanceState::new(total_held, total_attended, minimum_percent).map(|state| state.analyze())
}

/// Analyses the state as if the very next class were missed.
#[inline]
#[must_use]
pub fn simulate_one_miss(state: &AttendanceState) -> AttendanceAnalysis {
    simulate_misses(state, 1)
}

/// Analyses the state after `extra` more classes are held and missed.
#[inline]
#[must_use]
pub fn simulate_misses(state: &AttendanceState, extra: u64) -> AttendanceAnalysis {
    state.with_extra_misses(extra).analyze()
}

impl AttendanceState {
    #[must_use]
    pub fn analyze(&self) -> AttendanceAnalysis {
        let held = self.total_held();
        let attended = self.total_attended();
        let threshold = self.threshold();

        if held == 0 {
            tracing::debug!(
                minimum = self.minimum_percent(),
                "no classes held yet, no verdict"
            );
            return AttendanceAnalysis {
                current_percentage: 0.0,
                is_safe: threshold == 0,
                standing: Standing::InsufficientData,
                safe_bunks: SafeBunks::Limited(0),
                classes_to_target: ClassesToTarget::Reachable(0),
            };
        }

        let is_safe = meets_threshold(attended, held, threshold);
        let (standing, safe_bunks, classes_to_target) = if is_safe {
            (
                Standing::Safe,
                safe_bunks(attended, held, threshold),
                ClassesToTarget::Reachable(0),
            )
        } else {
            (
                Standing::Unsafe,
                SafeBunks::Limited(0),
                classes_to_target(attended, held, threshold),
            )
        };

        tracing::debug!(
            held,
            attended,
            minimum = self.minimum_percent(),
            is_safe,
            ?safe_bunks,
            ?classes_to_target,
            "analysed attendance"
        );

        AttendanceAnalysis {
            current_percentage: rounded_percentage(attended, held, 1),
            is_safe,
            standing,
            safe_bunks,
            classes_to_target,
        }
    }
}

/// `attended / held` is at or above `threshold` (in threshold units).
pub(crate) fn meets_threshold(attended: u64, held: u64, threshold: u64) -> bool {
    u128::from(attended) * u128::from(FULL_ATTENDANCE) >= u128::from(threshold) * u128::from(held)
}

// Caller guarantees the subject is currently safe.
fn safe_bunks(attended: u64, held: u64, threshold: u64) -> SafeBunks {
    if threshold == 0 {
        return SafeBunks::Unlimited;
    }
    let max_held = u128::from(attended) * u128::from(FULL_ATTENDANCE) / u128::from(threshold);
    SafeBunks::Limited(saturate(max_held.saturating_sub(u128::from(held))))
}

// Caller guarantees the subject is currently unsafe, hence attended < held.
fn classes_to_target(attended: u64, held: u64, threshold: u64) -> ClassesToTarget {
    if threshold >= FULL_ATTENDANCE {
        return ClassesToTarget::Unreachable;
    }
    let deficit = (u128::from(threshold) * u128::from(held))
        .saturating_sub(u128::from(attended) * u128::from(FULL_ATTENDANCE));
    let gain_per_class = u128::from(FULL_ATTENDANCE - threshold);
    ClassesToTarget::Reachable(saturate(deficit.div_ceil(gain_per_class)))
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// `attended / held * 100` rounded half-up to `places` decimals, computed in
/// integers so that e.g. 6.25 always rounds to 6.3. `held` must be non-zero.
#[allow(
    clippy::cast_precision_loss,
    reason = "display value only, never compared against the threshold"
)]
pub(crate) fn rounded_percentage(attended: u64, held: u64, places: u32) -> f64 {
    let factor = 10_u128.pow(places);
    let held = u128::from(held.max(1));
    let scaled = u128::from(attended) * 100 * factor;
    let rounded = (scaled * 2 + held) / (held * 2);
    rounded as f64 / factor as f64
}
