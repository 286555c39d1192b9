//! Data types produced by the two pipelines.

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzers::grade::Grade;
use crate::analyzers::limit::LimitStatus;
use crate::records::{Record, Records};
use crate::stats::Summary;

/// One day of logged meals, compared against the daily limit.
#[derive(Debug, Clone, Serialize)]
pub struct CalorieSession {
    pub(crate) meals: Vec<Record>,
    pub(crate) daily_limit: f64,
    pub(crate) total: f64,
    pub(crate) average: f64,
    pub(crate) status: LimitStatus,
}

impl CalorieSession {
    pub fn meals(&self) -> &[Record] {
        &self.meals
    }

    pub fn daily_limit(&self) -> f64 {
        self.daily_limit
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn status(&self) -> LimitStatus {
        self.status
    }
}

/// Number of records per letter grade, always listing A through F.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    pub(crate) counts: IndexMap<Grade, usize>,
}

impl Distribution {
    pub fn count(&self, grade: Grade) -> usize {
        self.counts.get(&grade).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        self.counts.iter().map(|(g, c)| (*g, *c))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Grades, distribution and pass/fail split for one gradebook run.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub(crate) records: Records,
    pub(crate) grades: IndexMap<String, Grade>,
    pub(crate) distribution: Distribution,
    pub(crate) passed: Vec<String>,
    pub(crate) failed: Vec<String>,
    pub(crate) summary: Summary,
}

impl GradeReport {
    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn grade_of(&self, name: &str) -> Option<Grade> {
        self.grades.get(name).copied()
    }

    /// `(name, marks, grade)` in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, Grade)> + '_ {
        self.records
            .iter()
            .filter_map(|(name, marks)| self.grade_of(name).map(|g| (name, marks, g)))
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}
