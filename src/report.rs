//! Console rendering of finished sessions.
//!
//! Every function here only formats; nothing is recomputed.

use crate::analyzers::types::{CalorieSession, Distribution, GradeReport};
use crate::stats::Extremum;

pub const RULE: &str = "---------------------------------------------";
const TABLE_RULE_WIDTH: usize = 40;

/// `{name:<20}{calories:>8.2}`, shared by the console table and the log file.
pub fn meal_line(name: &str, calories: f64) -> String {
    format!("{name:<20}{calories:>8.2}")
}

pub fn calorie_totals(session: &CalorieSession) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Total Calories Consumed: {:.2}\n",
        session.total()
    ));
    out.push_str(&format!(
        "Average Calories per Meal: {:.2}\n",
        session.average()
    ));
    out.push_str(&session.status().message());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn meal_table(session: &CalorieSession) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<20}{:>8}\n", "Meal Name", "Calories"));
    out.push_str(RULE);
    out.push('\n');
    for meal in session.meals() {
        out.push_str(&meal_line(&meal.name, meal.value));
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{:<20}{:>8.2}\n", "Total:", session.total()));
    out.push_str(&format!("{:<20}{:>8.2}\n", "Average:", session.average()));
    out
}

fn extremum_line(label: &str, e: &Extremum) -> String {
    format!("{label}: {:.2} ( {} )", e.value, e.names.join(", "))
}

/// `A: 1, B: 0, C: 2, D: 0, F: 1`
pub fn distribution_line(distribution: &Distribution) -> String {
    distribution
        .iter()
        .map(|(g, c)| format!("{g}: {c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn grade_summary(report: &GradeReport) -> String {
    let s = report.summary();
    let mut out = String::new();
    out.push_str("------ Analysis Summary ------\n");
    out.push_str(&format!("Students: {}\n", s.count));
    out.push_str(&format!("Average: {:.2}\n", s.mean));
    out.push_str(&format!("Median: {:.2}\n", s.median));
    out.push_str(&extremum_line("Max", &s.max));
    out.push('\n');
    out.push_str(&extremum_line("Min", &s.min));
    out.push('\n');
    out.push_str(&format!(
        "Grade distribution: {}\n",
        distribution_line(report.distribution())
    ));
    out.push_str("-------------------------------\n");
    out
}

pub fn grade_table(report: &GradeReport) -> String {
    let rule = "-".repeat(TABLE_RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("{:<20}{:>8}  {:>6}\n", "Name", "Marks", "Grade"));
    out.push_str(&rule);
    out.push('\n');
    for (name, marks, grade) in report.rows() {
        out.push_str(&format!("{name:<20}{marks:>8.2}  {grade:>6}\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn name_list(label: &str, names: &[String]) -> String {
    let joined = if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    };
    format!("{label} ({}): {joined}", names.len())
}

pub fn pass_fail(report: &GradeReport) -> String {
    format!(
        "{}\n{}\n",
        name_list("Passed", report.passed()),
        name_list("Failed", report.failed())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;
    use crate::validate::collect;

    fn report() -> GradeReport {
        let records = collect([("Alice", "92"), ("Bob", "76"), ("Carol", "76"), ("Dave", "38")]);
        GradeReport::from_records(records.unwrap()).unwrap()
    }

    #[test]
    fn test_meal_line_fixed_width() {
        let line = meal_line("Lunch", 620.0);
        assert_eq!(line.len(), 28);
        assert!(line.starts_with("Lunch "));
        assert!(line.ends_with("  620.00"));
    }

    #[test]
    fn test_calorie_totals() {
        let session = CalorieSession::new(
            vec![
                Record::new("Breakfast", 350.0),
                Record::new("Lunch", 620.0),
                Record::new("Dinner", 700.0),
            ],
            2000.0,
        )
        .unwrap();

        let totals = calorie_totals(&session);
        assert!(totals.contains("Total Calories Consumed: 1670.00"));
        assert!(totals.contains("Average Calories per Meal: 556.67"));
        assert!(totals.contains("330.00 calories remaining"));

        let table = meal_table(&session);
        assert!(table.contains(&meal_line("Dinner", 700.0)));
        assert!(table.contains(&format!("{:<20}{:>8}", "Average:", "556.67")));
    }

    #[test]
    fn test_grade_summary() {
        let text = grade_summary(&report());
        assert!(text.contains("Students: 4\n"));
        assert!(text.contains("Average: 70.50\n"));
        assert!(text.contains("Median: 76.00\n"));
        assert!(text.contains("Max: 92.00 ( Alice )\n"));
        assert!(text.contains("Min: 38.00 ( Dave )\n"));
        assert!(text.contains("Grade distribution: A: 1, B: 0, C: 2, D: 0, F: 1\n"));
    }

    #[test]
    fn test_grade_table_rows() {
        let text = grade_table(&report());
        let rows: Vec<_> = text.lines().skip(2).take(4).collect();
        assert_eq!(rows[0], format!("{:<20}{:>8}  {:>6}", "Alice", "92.00", "A"));
        assert_eq!(rows[3], format!("{:<20}{:>8}  {:>6}", "Dave", "38.00", "F"));
    }

    #[test]
    fn test_pass_fail_lists() {
        assert_eq!(
            pass_fail(&report()),
            "Passed (3): Alice, Bob, Carol\nFailed (1): Dave\n"
        );

        let all_pass = GradeReport::from_records(collect([("Eve", "99")]).unwrap()).unwrap();
        assert!(pass_fail(&all_pass).contains("Failed (0): None"));
    }
}
