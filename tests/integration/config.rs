use std::fs;

use crate::common::{
    make_temp_dir, run_with_args, run_with_input, run_without_input, stderr_text, stdout_text,
    write_config,
};

#[test]
fn configured_thresholds_change_report_verdicts() {
    let dir = make_temp_dir("config");
    write_config(&dir, 60.0, 50.0);
    fs::write(dir.join("attendance.txt"), "Math 26 40\n").unwrap();

    let output = run_with_input(&dir, "5\n6\n");
    let out = stdout_text(&output);
    let math = out
        .lines()
        .find(|l| l.starts_with("Math") && l.contains("26/40"))
        .expect("missing Math row");
    assert!(math.contains("65.00%") && math.contains("SAFE"), "{math}");
    assert!(out.contains("ELIGIBLE FOR EXAMS"), "{out}");
    assert!(!out.contains("NOT ELIGIBLE FOR EXAMS"), "{out}");
}

#[test]
fn malformed_config_is_a_startup_error() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ not json").unwrap();
    let output = run_without_input(&dir, &[]);
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Invalid JSON"));
    assert!(!dir.join("attendance.txt").exists());
}

#[test]
fn out_of_range_threshold_is_a_startup_error() {
    let dir = make_temp_dir("config");
    write_config(&dir, 100.0, 65.0);
    let output = run_without_input(&dir, &[]);
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Config error"));
}

#[test]
fn set_flag_updates_config_file() {
    let dir = make_temp_dir("config");
    let output = run_with_args(&dir, &["--set", "eligibility_threshold=80"], "6\n");
    assert!(output.status.success(), "{}", stderr_text(&output));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("config.json")).unwrap()).unwrap();
    assert_eq!(saved["eligibility_threshold"]["value"], serde_json::json!(80.0));
}

#[test]
fn set_flag_rejects_unknown_key() {
    let dir = make_temp_dir("config");
    let output = run_without_input(&dir, &["--set", "colour=blue"]);
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Unknown configuration key 'colour'"));
}

#[test]
fn disabled_file_logging_writes_no_log() {
    let dir = make_temp_dir("config");
    let output = run_with_args(
        &dir,
        &["--set", "file_logging_enabled=false"],
        "1\nMath\n30\n40\n6\n",
    );
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Data saved successfully."));
    assert!(!dir.join("logs").exists());
}

#[test]
fn startup_error_tolerates_unread_input() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ not json").unwrap();
    let script = "1\nMath\n30\n40\n".repeat(4096);
    let output = run_with_input(&dir, &script);
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Invalid JSON"));
}
