use std::fs;

use crate::common::{make_temp_dir, run_with_args, run_with_input, stderr_text, stdout_text};

#[test]
fn courses_survive_a_restart() {
    let dir = make_temp_dir("persist");
    let first = run_with_input(&dir, "1\nMath\n30\n40\n1\nPhy\n20\n40\n6\n");
    assert!(first.status.success());
    assert_eq!(
        fs::read_to_string(dir.join("attendance.txt")).unwrap(),
        "Math 30 40\nPhy 20 40\n"
    );

    let second = run_with_input(&dir, "6\n");
    assert!(stdout_text(&second).contains("Courses loaded: 2"));
    assert_eq!(
        fs::read_to_string(dir.join("attendance.txt")).unwrap(),
        "Math 30 40\nPhy 20 40\n"
    );
}

#[test]
fn modify_and_remove_are_saved_on_exit() {
    let dir = make_temp_dir("persist");
    fs::write(dir.join("attendance.txt"), "Math 30 40\nPhy 20 40\nChem 5 10\n").unwrap();
    let output = run_with_input(&dir, "2\n2\n25\n45\n3\n1\n6\n");
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.join("attendance.txt")).unwrap(),
        "Phy 25 45\nChem 5 10\n"
    );
}

#[test]
fn malformed_record_truncates_load_with_warning() {
    let dir = make_temp_dir("persist");
    fs::write(dir.join("attendance.txt"), "Math 30 40\nPhy x 40\nChem 5 10\n").unwrap();
    let output = run_with_input(&dir, "6\n");
    assert!(output.status.success());

    assert!(stdout_text(&output).contains("Courses loaded: 1"));
    assert!(stderr_text(&output).contains("at record 2"));
    assert_eq!(
        fs::read_to_string(dir.join("attendance.txt")).unwrap(),
        "Math 30 40\n"
    );
}

#[test]
fn data_flag_overrides_config_store() {
    let dir = make_temp_dir("persist");
    let output = run_with_args(
        &dir,
        &["--data", "terms/fall.txt"],
        "1\nMath\n30\n40\n6\n",
    );
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.join("terms").join("fall.txt")).unwrap(),
        "Math 30 40\n"
    );
    assert!(!dir.join("attendance.txt").exists());
}
