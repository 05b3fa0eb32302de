use std::fs;

use crate::common::{
    make_temp_dir, read_log_contents, run_with_input, run_without_input, stderr_text, stdout_text,
};

#[test]
fn exit_writes_an_empty_store() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "6\n");
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.join("attendance.txt")).unwrap(), "");
    assert!(stdout_text(&output).contains("Data saved successfully. Exiting..."));
}

#[test]
fn startup_lists_menu_and_paths() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "6\n");
    let out = stdout_text(&output);
    for line in [
        "Data file: attendance.txt",
        "Courses loaded: 0",
        "1. Add New Course",
        "2. Modify Course Attendance",
        "3. Remove Course",
        "4. Predict Attendance",
        "5. Generate Attendance Report",
        "6. Exit",
        "ELIGIBILITY_THRESHOLD",
    ] {
        assert!(out.contains(line), "missing '{line}' in:\n{out}");
    }
}

#[test]
fn report_shows_per_course_status_and_semester_verdict() {
    let dir = make_temp_dir("core");
    let input = "1\nMath\n30\n40\n1\nPhy\n20\n40\n1\nLab\n0\n0\n5\n6\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let lines: Vec<String> = stdout_text(&output).lines().map(str::to_string).collect();
    let math = lines
        .iter()
        .find(|l| l.starts_with("Math") && l.contains("30/40"))
        .expect("missing Math row");
    assert!(math.contains("75.00%") && math.contains("SAFE"), "{math}");
    let phy = lines
        .iter()
        .find(|l| l.starts_with("Phy") && l.contains("20/40"))
        .expect("missing Phy row");
    assert!(phy.contains("50.00%") && phy.contains("CRITICAL"), "{phy}");
    let lab = lines
        .iter()
        .find(|l| l.starts_with("Lab") && l.contains("0/0"))
        .expect("missing Lab row");
    assert!(lab.contains("N/A"), "{lab}");

    let out = lines.join("\n");
    assert!(out.contains("62.50% (50/80)"), "{out}");
    assert!(out.contains("NOT ELIGIBLE FOR EXAMS"), "{out}");
}

#[test]
fn report_on_empty_store_says_no_courses() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "5\n6\n");
    assert!(stdout_text(&output).contains("No courses available."));
}

#[test]
fn predict_prints_forecast_per_course() {
    let dir = make_temp_dir("core");
    fs::write(dir.join("attendance.txt"), "Phy 20 40\nLab 0 0\n").unwrap();
    let output = run_with_input(&dir, "4\n40\n6\n");
    let out = stdout_text(&output);
    assert!(out.contains("--- Attendance Forecast ---"), "{out}");
    assert!(
        out.contains("Phy: Expected Attendance: 75.00% (Eligible)"),
        "{out}"
    );
    assert!(out.contains("Lab: N/A"), "{out}");
}

#[test]
fn invalid_input_is_reported_and_menu_continues() {
    let dir = make_temp_dir("core");
    let input = "9\n1\nMath\n12\n10\n6\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let err = stderr_text(&output);
    assert!(err.contains("Invalid option."), "{err}");
    assert!(
        err.contains("Invalid attendance details: 12 attended out of 10 conducted."),
        "{err}"
    );
    assert_eq!(fs::read_to_string(dir.join("attendance.txt")).unwrap(), "");
}

#[test]
fn end_of_input_does_not_save() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "1\nMath\n30\n40\n");
    assert!(output.status.success());
    assert!(!dir.join("attendance.txt").exists());
}

#[test]
fn unknown_argument_fails_with_usage() {
    let dir = make_temp_dir("core");
    let output = run_without_input(&dir, &["--verbose"]);
    assert!(!output.status.success());
    let err = stderr_text(&output);
    assert!(err.contains("Unknown argument: --verbose"), "{err}");
    assert!(err.contains("Usage: attendit"), "{err}");
}

#[test]
fn missing_flag_value_fails() {
    let dir = make_temp_dir("core");
    let output = run_without_input(&dir, &["--data"]);
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Missing value for --data"));
}

#[test]
fn mutations_are_written_to_the_session_log() {
    let dir = make_temp_dir("core");
    let input = "1\nMath\n30\n40\n2\n1\n31\n41\n3\n1\n6\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Added Course(name='Math', attended=30, conducted=40)"), "{log}");
    assert!(log.contains("Modified #1"), "{log}");
    assert!(log.contains("Removed Course(name='Math', attended=31, conducted=41)"), "{log}");
    assert!(log.contains("Saved 0 course(s)"), "{log}");
}
