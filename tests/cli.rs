use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn salesman() -> Command {
    Command::cargo_bin("salesman").unwrap()
}

const SQUARE: &str = "4\n1 0 0\n2 10 0\n3 10 10\n4 0 10\n";

#[test]
fn generate_writes_data_file() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("nested").join("data.txt");

    salesman()
        .arg("--data")
        .arg(&data)
        .args(["--seed", "3", "generate", "--count", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]: Generated and saved 12 cities."));

    let content = fs::read_to_string(&data).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("12"));
    assert_eq!(lines.count(), 12);
}

#[test]
fn generate_rejects_more_points_than_the_grid_holds() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");

    salesman()
        .arg("--data")
        .arg(&data)
        .args(["generate", "--count", "10", "--max-coordinate", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generator settings"));
    assert!(!data.exists());
}

#[test]
fn greedy_solve_prints_tour() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, SQUARE).unwrap();

    salesman()
        .arg("--data")
        .arg(&data)
        .args(["solve", "--algorithm", "greedy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]: Loaded 4 points."))
        .stdout(predicate::str::contains("--- Running Greedy Algorithm ---"))
        .stdout(predicate::str::contains(
            "City1 -> City2 -> City3 -> City4 -> City1 (Distance: 40.00)",
        ))
        .stdout(predicate::str::contains("Iterations: 1 (completed)"))
        .stdout(predicate::str::contains("Time: "));
}

#[test]
fn seeded_ant_colony_finds_square_perimeter() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, SQUARE).unwrap();

    salesman()
        .arg("--data")
        .arg(&data)
        .args(["--seed", "5", "solve", "--algorithm", "ant-colony"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Running Ant Colony Optimization ---"))
        .stdout(predicate::str::contains("(Distance: 40.00)"));
}

#[test]
fn solve_with_save_archives_run() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    let outputs = dir.path().join("outputs");
    fs::write(&data, SQUARE).unwrap();

    salesman()
        .arg("--data")
        .arg(&data)
        .arg("--outputs")
        .arg(&outputs)
        .args(["solve", "--algorithm", "greedy", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]: Saved to: "));

    let runs: Vec<_> = fs::read_dir(&outputs)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(runs.len(), 1);
    let run = &runs[0];
    assert!(run
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("Greedy_Algorithm_"));

    let logs = fs::read_to_string(run.join("logs.txt")).unwrap();
    assert!(logs.contains("--- Result ---"));
    assert!(fs::read_to_string(run.join("chart.svg")).unwrap().contains("<svg"));
    assert!(fs::read_to_string(run.join("tour.txt")).unwrap().starts_with("4\n"));
}

#[test]
fn missing_data_file_fails() {
    let dir = tempdir().unwrap();

    salesman()
        .arg("--data")
        .arg(dir.path().join("absent.txt"))
        .arg("solve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_data_file_fails() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, "2\n1 5 5\n2 7 oops\n").unwrap();

    salesman()
        .arg("--data")
        .arg(&data)
        .arg("solve")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid format: Invalid coordinate format for point 2",
        ));
}

#[test]
fn empty_data_file_fails() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, "0\n").unwrap();

    salesman()
        .arg("--data")
        .arg(&data)
        .arg("solve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is empty."));
}

#[test]
fn log_flag_writes_log_file() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.txt");
    let log = dir.path().join("salesman.log");

    salesman()
        .arg("--data")
        .arg(&data)
        .env_remove("RUST_LOG")
        .arg("--log")
        .arg(&log)
        .args(["--seed", "1", "generate", "--count", "5"])
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("Starting Salesman"));
    assert!(content.contains("Wrote 5 points"));
}
