// End-to-end runs of the binary in headless mode.
use std::path::Path;
use std::process::Command;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_diameter-inspect");
    Command::new(exe)
}

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write csv");
}

#[test]
fn default_files_are_read_from_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(temp.path(), "meting1.csv", "Name,Value\na,0.4\nb,0.6\n");
    write(temp.path(), "meting2.csv", "Name,Value\nc,0.65\nd,0.55\n");

    let out = cmd()
        .current_dir(temp.path())
        .arg("--no-window")
        .output()
        .expect("run");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.starts_with("Combined data:\n"));
    assert!(stdout.contains("Total measurements: 4\n"));
    assert!(stdout.contains("  a: 0.400 mm\n  d: 0.550 mm\n"));
    assert!(stdout.contains("Average of measurements below 0.6mm: 0.4750 mm"));
    assert!(stdout.contains("Average of measurements at or above 0.6mm: 0.6250 mm"));
    assert!(stdout.contains("  Minimum: 0.600 mm\n  Maximum: 0.650 mm"));
    assert!(stdout.contains("Overall average: 0.5500 mm"));
    assert!(stdout.contains("Overall range: 0.400 mm to 0.650 mm"));
}

#[test]
fn explicit_paths_and_empty_group() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(temp.path(), "x.csv", "Name,Value,Plate\nh1,0.71,P1\n");
    write(temp.path(), "y.csv", "Name,Value,Plate\nh2,0.6,P2\n");

    let out = cmd()
        .arg(temp.path().join("x.csv"))
        .arg(temp.path().join("y.csv"))
        .arg("--no-window")
        .output()
        .expect("run");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf8");
    assert!(stdout.contains("Plate"));
    assert!(stdout.contains("No measurements below 0.6mm"));
    assert!(stdout.contains("Count: 2\nAverage of measurements at or above 0.6mm: 0.6550 mm"));
}

#[test]
fn missing_file_fails_without_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(temp.path(), "meting1.csv", "Name,Value\na,0.4\n");

    let out = cmd()
        .current_dir(temp.path())
        .arg("--no-window")
        .output()
        .expect("run");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("data load error"));
    assert!(stderr.contains("meting2.csv"));
}
