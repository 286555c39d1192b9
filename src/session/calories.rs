//! Daily calorie tracker session.

use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::analyzers::types::CalorieSession;
use crate::output::{log_json, write_calorie_log};
use crate::prompt::Prompter;
use crate::records::Record;
use crate::report;
use crate::validate;

pub const BANNER: &str = "\
=============================================
   Welcome to the Daily Calorie Tracker CLI
=============================================
This tool helps you log your meals and track
total calories intake for the day.
You can compare your calories with your daily limit
and save the session for future reference.
---------------------------------------------";

/// Asks for a meal count, then exactly that many name/calorie pairs.
pub fn collect_meals<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Vec<Record>> {
    let count = p.until(
        "\nHow many meals do you want to enter today? ",
        validate::count,
    )?;
    p.say(&format!(
        "\nNow, you will enter details for {count} meals today."
    ))?;

    let mut meals = Vec::new();
    for i in 1..=count {
        p.say(&format!("\nMeal {i}:"))?;
        let name = p.until("\tEnter meal name: ", validate::name)?;
        let calories = p.until(
            &format!("\tEnter calories for {name}: "),
            validate::non_negative,
        )?;
        meals.push(Record::new(name, calories));
    }
    Ok(meals)
}

/// Runs one tracker session, exporting into `log_dir` if the user agrees.
pub fn run_once<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    log_dir: &Path,
) -> Result<CalorieSession> {
    let meals = collect_meals(p)?;

    p.say(&format!("\n{}", report::RULE))?;
    p.say(&format!(
        "Meals Entered: {}",
        meals
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ))?;
    p.say(report::RULE)?;

    let limit = p.until("\nEnter your daily calorie limit: ", validate::positive)?;
    let session = CalorieSession::new(meals, limit)?;
    log_json("calorie_session", &session)?;

    p.say("")?;
    p.say(report::calorie_totals(&session).trim_end())?;
    p.say("")?;
    p.say(report::meal_table(&session).trim_end())?;

    if p.confirm("\nDo you want to save this session to a file? (yes/no): ")? {
        match write_calorie_log(log_dir, &session, &Local::now()) {
            Ok(path) => {
                p.say(&format!("\n✅ Report saved successfully to '{}'", path.display()))?;
            }
            Err(e) => {
                warn!(error = %e, "Calorie log export failed");
                p.say(&format!("\n⚠️  Could not save the report: {e}"))?;
            }
        }
    } else {
        info!("Calorie session not saved");
        p.say("\nReport not saved.")?;
    }

    Ok(session)
}
