use std::fs;
use std::io::Cursor;

use tally::analyzers::grade::Grade;
use tally::analyzers::types::GradeReport;
use tally::output::write_grade_table;
use tally::parser::load_records;
use tally::prompt::Prompter;
use tally::session::{calories, gradebook};
use tally::validate::collect;

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 5)
}

#[test]
fn test_calorie_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = prompter("3\nBreakfast\n350\nLunch\n620\nDinner\n700\n2000\nyes\n");

    let session = calories::run_once(&mut p, dir.path()).unwrap();
    assert_eq!(format!("{:.2}", session.total()), "1670.00");
    assert_eq!(format!("{:.2}", session.average()), "556.67");
    assert_eq!(session.status().to_string(), "Within limit (330.00 remaining)");

    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(logs.len(), 1);

    let name = logs[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("calorie_log_"));
    assert!(name.ends_with(".txt"));

    let content = fs::read_to_string(&logs[0]).unwrap();
    assert!(content.contains("Status: Within limit (330.00 remaining)"));

    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Total Calories Consumed: 1670.00"));
    assert!(out.contains("Report saved successfully"));
}

#[test]
fn test_gradebook_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.csv");
    let input = format!(
        "1\nAlice\n92\nBob\n76\nCarol\n76\nDave\n38\n\ny\n{}\n",
        output.display()
    );

    let mut p = prompter(&input);
    let report = gradebook::run_once(&mut p, "unused.csv").unwrap().unwrap();

    let s = report.summary();
    assert_eq!(s.mean, 70.5);
    assert_eq!(s.median, 76.0);
    assert_eq!((s.max.value, s.max.names.clone()), (92.0, vec!["Alice".to_string()]));
    assert_eq!((s.min.value, s.min.names.clone()), (38.0, vec!["Dave".to_string()]));

    let grades: Vec<_> = report.rows().map(|(_, _, g)| g).collect();
    assert_eq!(grades, vec![Grade::A, Grade::C, Grade::C, Grade::F]);
    assert_eq!(report.passed(), ["Alice", "Bob", "Carol"]);
    assert_eq!(report.failed(), ["Dave"]);

    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Grade distribution: A: 1, B: 0, C: 2, D: 0, F: 1"));
    assert!(out.contains("Passed (3): Alice, Bob, Carol"));
    assert!(out.contains("Failed (1): Dave"));

    let table = fs::read_to_string(&output).unwrap();
    assert!(table.starts_with("Name,Marks,Grade\nAlice,92.00,A\n"));
}

#[test]
fn test_gradebook_from_csv_skips_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("marks.csv");
    fs::write(&source, "Alice,92\nbroken\nBob,seventy\n\nCarol,61\n").unwrap();

    let input = format!("2\n{}\nno\n", source.display());
    let mut p = prompter(&input);
    let report = gradebook::run_once(&mut p, "unused.csv").unwrap().unwrap();

    assert_eq!(report.records().names().collect::<Vec<_>>(), vec!["Alice", "Carol"]);
    assert_eq!(report.grade_of("Carol"), Some(Grade::D));

    let out = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(out.matches("Skipping invalid row").count(), 2);
}

#[test]
fn test_export_then_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grades.csv");

    let records = collect([
        ("Alice", "92.004"),
        ("Bob", "79.5"),
        ("O'Neil, Pat", "59.5"),
        ("Dave", "38"),
    ])
    .unwrap();
    let original = GradeReport::from_records(records).unwrap();
    write_grade_table(&path, &original).unwrap();

    let loaded = load_records(&path).unwrap();
    // the header row is the only skipped line
    assert_eq!(loaded.skipped.len(), 1);

    let reloaded = GradeReport::from_records(loaded.records).unwrap();
    let before: Vec<_> = original
        .rows()
        .map(|(n, m, g)| (n.to_string(), format!("{m:.2}"), g))
        .collect();
    let after: Vec<_> = reloaded
        .rows()
        .map(|(n, m, g)| (n.to_string(), format!("{m:.2}"), g))
        .collect();
    assert_eq!(before, after);
}
