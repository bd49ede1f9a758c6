use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::data::golfer::MAX_SCORE_TO_PAR;
use crate::data::snapshot::PoolSnapshot;
use crate::data::tiers::MAX_TIER;
use crate::optimizer::multiset::MAX_POINTS;
use crate::scoring::ROSTER_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// Check a snapshot before it reaches the optimizer, which assumes tiers in
/// range and unique golfer ids.
pub fn validate_snapshot(snapshot: &PoolSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_ids = HashSet::new();

    for (index, golfer) in snapshot.golfers.iter().enumerate() {
        let context = if golfer.id.is_empty() {
            format!("golfers[{index}]")
        } else {
            format!("golfers[{index}] ({})", golfer.id)
        };

        if golfer.id.trim().is_empty() {
            report.push(ValidationSeverity::Error, &context, "golfer id is empty");
        } else if !seen_ids.insert(golfer.id.as_str()) {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("duplicate golfer id '{}'", golfer.id),
            );
        }
        if golfer.name.trim().is_empty() {
            report.push(ValidationSeverity::Warning, &context, "golfer name is empty");
        }
        if golfer.tier > MAX_TIER {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("tier {} is outside 0-{MAX_TIER}", golfer.tier),
            );
        }
        if !(-MAX_SCORE_TO_PAR..=MAX_SCORE_TO_PAR).contains(&golfer.score) {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!(
                    "score {} is outside -{MAX_SCORE_TO_PAR} to {MAX_SCORE_TO_PAR}",
                    golfer.score
                ),
            );
        }
    }

    let board = snapshot.board();
    if board.total_golfers() < ROSTER_SIZE {
        report.push(
            ValidationSeverity::Warning,
            "golfers",
            format!(
                "{} golfer(s) in range; a roster needs {ROSTER_SIZE}",
                board.total_golfers()
            ),
        );
    }

    if let Some(min_points) = snapshot.min_points {
        if min_points > MAX_POINTS {
            report.push(
                ValidationSeverity::Warning,
                "min_points",
                format!("{min_points} exceeds the maximum possible {MAX_POINTS}"),
            );
        } else if let Some(reachable) = board.max_reachable_points() {
            if min_points > reachable {
                report.push(
                    ValidationSeverity::Warning,
                    "min_points",
                    format!("{min_points} exceeds the {reachable} points available golfers can reach"),
                );
            }
        }
    }

    for (tier, golfers) in board.iter() {
        if golfers.is_empty() {
            report.push(
                ValidationSeverity::Info,
                format!("tier {tier}"),
                "no golfers assigned",
            );
        }
    }

    report
}
