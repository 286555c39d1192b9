use indexmap::IndexMap;
use tracing::debug;

use crate::analyzers::grade::{Grade, grade};
use crate::analyzers::limit::LimitStatus;
use crate::analyzers::types::{CalorieSession, Distribution, GradeReport};
use crate::analyzers::utility::{mean, sum};
use crate::error::SessionError;
use crate::records::{Record, Records};
use crate::stats::Summary;

/// Marks at or above this pass.
pub const PASS_THRESHOLD: f64 = 40.0;

/// Assigns a letter grade to every record, keeping record order.
pub fn build_grades(records: &Records) -> IndexMap<String, Grade> {
    records
        .iter()
        .map(|(name, score)| (name.to_string(), grade(score)))
        .collect()
}

/// Counts records per letter, with every letter present even at zero.
pub fn distribution<'a, I>(grades: I) -> Distribution
where
    I: IntoIterator<Item = &'a Grade>,
{
    let mut counts: IndexMap<Grade, usize> = Grade::ALL.iter().map(|g| (*g, 0)).collect();
    for g in grades {
        *counts.entry(*g).or_default() += 1;
    }
    Distribution { counts }
}

/// Splits names into `(passed, failed)` at `threshold`, inclusive for passing.
pub fn partition_by_threshold(records: &Records, threshold: f64) -> (Vec<String>, Vec<String>) {
    let (passed, failed): (Vec<_>, Vec<_>) =
        records.iter().partition(|(_, score)| *score >= threshold);

    let names = |v: Vec<(&str, f64)>| v.into_iter().map(|(n, _)| n.to_string()).collect();
    (names(passed), names(failed))
}

impl GradeReport {
    /// Derives grades, distribution, pass/fail lists and summary figures.
    pub fn from_records(records: Records) -> Result<Self, SessionError> {
        let summary = Summary::from_records(&records).ok_or(SessionError::NoData)?;
        let grades = build_grades(&records);
        let distribution = distribution(grades.values());
        let (passed, failed) = partition_by_threshold(&records, PASS_THRESHOLD);

        debug!(
            students = summary.count,
            average = summary.mean,
            median = summary.median,
            passed = passed.len(),
            failed = failed.len(),
            "Grade report built"
        );

        Ok(GradeReport {
            records,
            grades,
            distribution,
            passed,
            failed,
            summary,
        })
    }
}

impl CalorieSession {
    /// Totals the meals and classifies the total against `daily_limit`.
    pub fn new(meals: Vec<Record>, daily_limit: f64) -> Result<Self, SessionError> {
        if meals.is_empty() {
            return Err(SessionError::NoData);
        }
        if daily_limit.is_nan() || daily_limit <= 0.0 {
            return Err(SessionError::InvalidLimit { limit: daily_limit });
        }

        let values: Vec<f64> = meals.iter().map(|m| m.value).collect();
        let total = sum(&values);
        let average = mean(&values);
        let status = LimitStatus::classify(total, daily_limit);

        debug!(meals = meals.len(), total, average, daily_limit, %status, "Calorie session built");

        Ok(CalorieSession {
            meals,
            daily_limit,
            total,
            average,
            status,
        })
    }
}
