use serde::Serialize;
use std::fmt;

/// Where a day's total stands against the daily limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LimitStatus {
    Exceeded { excess: f64 },
    ExactlyMet,
    WithinLimit { remaining: f64 },
}

impl LimitStatus {
    /// Compares `total` against `limit`.
    ///
    /// Equality is exact `f64` comparison; a total that lands on the limit
    /// only after rounding counts as exceeded or within.
    pub fn classify(total: f64, limit: f64) -> Self {
        if total > limit {
            LimitStatus::Exceeded {
                excess: total - limit,
            }
        } else if total == limit {
            LimitStatus::ExactlyMet
        } else {
            LimitStatus::WithinLimit {
                remaining: limit - total,
            }
        }
    }

    /// One-line console message for this status.
    pub fn message(&self) -> String {
        match self {
            LimitStatus::Exceeded { excess } => {
                format!("⚠️  You have exceeded your daily calorie limit by {excess:.2} calories!")
            }
            LimitStatus::ExactlyMet => "ℹ️  You have exactly met your daily calorie limit.".into(),
            LimitStatus::WithinLimit { remaining } => format!(
                "✅ You are within your daily calorie limit. {remaining:.2} calories remaining."
            ),
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitStatus::Exceeded { excess } => write!(f, "Exceeded by {excess:.2} calories"),
            LimitStatus::ExactlyMet => write!(f, "Exactly met"),
            LimitStatus::WithinLimit { remaining } => {
                write!(f, "Within limit ({remaining:.2} remaining)")
            }
        }
    }
}
