use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run_jrnl(home: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_jrnl"))
        .env("HOME", home.path())
        .env("JRNL_EDITOR", "true")
        .args(args)
        .output()
        .expect("Failed to run jrnl")
}

fn journal_home() -> TempDir {
    let home = TempDir::new().unwrap();
    fs::create_dir(home.path().join(".jrnl")).unwrap();
    home
}

#[test]
fn test_invalid_dates_rejected_without_writing() {
    let home = journal_home();

    for date in ["2023-01-01", "1-1-2023", "13-40-2023", "02-30-2024", "02-29-2023"] {
        let output = run_jrnl(&home, &["-d", date, "should not land"]);
        // Validation failures are reported, not surfaced in the exit code
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(date));
        assert!(stdout.contains("Invalid date format:"));
        assert!(stdout.contains("Please use the format: mm-dd-yyyy"));
    }

    let written: Vec<_> = fs::read_dir(home.path().join(".jrnl")).unwrap().collect();
    assert!(written.is_empty());
}

#[test]
fn test_invalid_date_skips_editor() {
    let home = journal_home();

    let output = Command::new(env!("CARGO_BIN_EXE_jrnl"))
        .env("HOME", home.path())
        .env("JRNL_EDITOR", "touch")
        .args(["-d", "13-01-2023", "-v"])
        .output()
        .expect("Failed to run jrnl");
    assert!(output.status.success());
    assert!(!home.path().join(".jrnl/13-01-2023.txt").exists());
}

#[test]
fn test_invalid_date_skips_delete() {
    let home = journal_home();
    let kept = home.path().join(".jrnl/1-2-2024.txt");
    fs::write(&kept, "still here").unwrap();

    let output = run_jrnl(&home, &["-d", "1-2-2024", "-o"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&kept).unwrap(), "still here");
}

#[test]
fn test_leap_day_accepted() {
    let home = journal_home();

    let output = run_jrnl(&home, &["-d", "02-29-2024", "leap"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Valid date format"));
    assert_eq!(
        fs::read_to_string(home.path().join(".jrnl/02-29-2024.txt")).unwrap(),
        "leap"
    );
}
