// src/report.rs
use serde::Serialize;

use crate::core::decision::BunkDecision;
use crate::core::zone::{RiskZone, classify};
use crate::error::InvalidInput;
use crate::models::{AttendanceAnalysis, AttendanceState, ClassesToTarget, Overview, SafeBunks};

const BAR_WIDTH: u64 = 20;

/// Everything shown for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectReport {
    pub subject: String,
    pub held: u64,
    pub attended: u64,
    pub minimum_percentage: f64,
    pub zone: RiskZone,
    pub note: String,
    #[serde(flatten)]
    pub analysis: AttendanceAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bunk: Option<BunkDecision>,
}

impl SubjectReport {
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `comfort_margin` is invalid.
    #[inline]
    pub fn new(
        subject: impl Into<String>,
        state: &AttendanceState,
        comfort_margin: f64,
    ) -> Result<Self, InvalidInput> {
        let analysis = state.analyze();
        Ok(Self {
            subject: subject.into(),
            held: state.total_held(),
            attended: state.total_attended(),
            minimum_percentage: state.minimum_percent(),
            zone: classify(state, comfort_margin)?,
            note: safety_note(&analysis),
            analysis,
            bunk: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn with_decision(self, state: &AttendanceState) -> Self {
        Self {
            bunk: Some(BunkDecision::for_next_class(state)),
            ..self
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let standing = if self.analysis.has_insufficient_data() {
            format!(
                "  [{}]    N/A  (0/0, minimum {}%)",
                progress_bar(0, 0),
                self.minimum_percentage
            )
        } else {
            format!(
                "  [{}] {:>5.1}%  ({}/{}, minimum {}%)",
                progress_bar(self.attended, self.held),
                self.analysis.current_percentage,
                self.attended,
                self.held,
                self.minimum_percentage
            )
        };

        let mut out = format!(
            "{}\n{standing}\n  {}: {}",
            self.subject,
            self.zone.label(),
            self.note
        );
        if let Some(margin) = margin_note(&self.analysis, self.minimum_percentage) {
            out.push_str(&format!(" ({margin})"));
        }

        if let Some(bunk) = &self.bunk {
            out.push_str(&format!(
                "\n  {} [{}], {:.2}% after missing the next class",
                bunk.decision(),
                bunk.status(),
                bunk.percentage_after
            ));
        }
        out
    }
}

/// Overall numbers in the shape they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewReport {
    pub subjects: u64,
    pub held: u64,
    pub attended: u64,
    pub missed: u64,
    pub overall_percentage: Option<f64>,
}

impl From<Overview> for OverviewReport {
    #[inline]
    fn from(overview: Overview) -> Self {
        Self {
            subjects: overview.subjects,
            held: overview.held,
            attended: overview.attended,
            missed: overview.missed(),
            overall_percentage: overview.overall_percentage(),
        }
    }
}

impl OverviewReport {
    #[must_use]
    pub fn render(&self) -> String {
        let overall = self
            .overall_percentage
            .map_or_else(|| String::from("N/A"), |p| format!("{p:.1}%"));
        format!(
            "Overall: {overall} across {} {} ({} attended, {} missed)",
            self.subjects,
            if self.subjects == 1 { "subject" } else { "subjects" },
            self.attended,
            self.missed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub subjects: Vec<SubjectReport>,
    pub overview: OverviewReport,
}

impl Summary {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for report in &self.subjects {
            out.push_str(&report.render());
            out.push_str("\n\n");
        }
        out.push_str(&self.overview.render());
        out
    }
}

/// One-line advice matching the analysis.
#[must_use]
pub fn safety_note(analysis: &AttendanceAnalysis) -> String {
    if analysis.has_insufficient_data() {
        return String::from("No attendance data available");
    }
    if analysis.is_safe {
        match analysis.safe_bunks {
            SafeBunks::Unlimited => String::from("Can bunk any number of classes"),
            SafeBunks::Limited(0) => String::from("Cannot bunk next class"),
            SafeBunks::Limited(n) => format!("Can bunk next {n} {} safely", classes(n)),
        }
    } else {
        match analysis.classes_to_target {
            ClassesToTarget::Unreachable => {
                String::from("Target not achievable with future attendance alone")
            }
            ClassesToTarget::Reachable(n) => format!("Need {n} more {} to be safe", classes(n)),
        }
    }
}

/// Distance between the displayed percentage and the minimum, e.g.
/// `"13.0% above the minimum"`.
#[must_use]
pub fn margin_note(analysis: &AttendanceAnalysis, minimum_percentage: f64) -> Option<String> {
    if analysis.has_insufficient_data() {
        return None;
    }
    let distance = (analysis.current_percentage - minimum_percentage).abs();
    let direction = if analysis.is_safe { "above" } else { "below" };
    Some(format!("{distance:.1}% {direction} the minimum"))
}

/// Fixed-width bar of `#` for attended and `-` for the rest.
#[must_use]
pub fn progress_bar(attended: u64, held: u64) -> String {
    let filled = if held == 0 {
        0
    } else {
        let held = u128::from(held);
        let scaled = u128::from(attended).min(held) * u128::from(BAR_WIDTH);
        u64::try_from((scaled * 2 + held) / (held * 2)).unwrap_or(BAR_WIDTH)
    };
    (0..BAR_WIDTH)
        .map(|i| if i < filled { '#' } else { '-' })
        .collect()
}

const fn classes(n: u64) -> &'static str {
    if n == 1 { "class" } else { "classes" }
}
