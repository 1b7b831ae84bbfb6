//! Integration tests for the exoctl binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn exoctl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("exoctl")?;
    cmd.env_remove("RUST_LOG").env_remove("EXOSENSE_CONFIG");
    Ok(cmd)
}

/// Fast session: 1 kHz, short calibration, no pauses.
fn quick_config(dir: &TempDir) -> Result<std::path::PathBuf, std::io::Error> {
    let path = dir.path().join("session.yaml");
    fs::write(
        &path,
        "sampling_frequency_hz: 1000\n\
         stream_delay_ms: 0\n\
         calibration:\n  samples: 20\n  warmup: 5\n  countdown_seconds: 0\n  echo: false\n  settle_ms: 0\n",
    )?;
    Ok(path)
}

#[test]
fn test_torque_query() -> TestResult {
    exoctl()?
        .args(["torque", "--material", "b", "--direction", "i", "--angle", "30"])
        .assert()
        .success()
        .stdout("0.482376\n");
    Ok(())
}

#[test]
fn test_torque_unknown_tag_falls_back_to_zero() -> TestResult {
    exoctl()?
        .args(["torque", "--material", "purple", "--direction", "i", "--angle", "30"])
        .assert()
        .success()
        .stdout("0.000000\n")
        .stderr(predicate::str::contains("unspecified model parameters"));
    Ok(())
}

#[test]
fn test_torque_strict_rejects_unknown_tag() -> TestResult {
    exoctl()?
        .args(["torque", "--material", "purple", "--direction", "i", "--angle", "30", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("purple"));
    Ok(())
}

#[test]
fn test_map_extrapolates() -> TestResult {
    exoctl()?
        .args(["map", "15", "0", "10", "0", "100"])
        .assert()
        .success()
        .stdout("150.000000\n");
    exoctl()?
        .args(["map", "-5", "-10", "10", "0", "100"])
        .assert()
        .success()
        .stdout("25.000000\n");
    Ok(())
}

#[test]
fn test_map_degenerate_range() -> TestResult {
    exoctl()?
        .args(["map", "1", "5", "5", "0", "100"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("degenerate range"));
    Ok(())
}

#[test]
fn test_header_layouts() -> TestResult {
    exoctl()?
        .arg("header")
        .assert()
        .success()
        .stdout("gyroX\tgyroY\tgyroZ\ttouch\tpotRight\tpotLeft\n");
    exoctl()?
        .args(["header", "--layout", "imu", "--torque"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("accX\taccY\taccZ\t"))
        .stdout(predicate::str::ends_with("torqueRight\ttorqueLeft\n"));
    Ok(())
}

#[test]
fn test_run_streams_requested_rows() -> TestResult {
    let dir = TempDir::new()?;
    let config = quick_config(&dir)?;

    let output = exoctl()?
        .args(["run", "--ticks", "25", "--seed", "11", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("------------- click on the button to start the program -------------\n"));
    assert!(stdout.contains("Calibration Finished, Gyro offsets:\n"));
    let rows = stdout
        .lines()
        .filter(|line| line.split('\t').count() == 6)
        .count();
    assert_eq!(rows, 25);
    Ok(())
}

#[test]
fn test_run_waits_for_operator_ready() -> TestResult {
    let dir = TempDir::new()?;
    let config = quick_config(&dir)?;
    let output = exoctl()?
        .args(["run", "--ticks", "3", "--ready-after", "5000", "-vv", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("------------- click on the button to start the program -------------")
    );
    assert_eq!(stdout.lines().rev().take_while(|l| l.split('\t').count() == 6).count(), 3);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("polls=5001"), "{stderr}");
    Ok(())
}

#[test]
fn test_run_imu_layout_with_torque() -> TestResult {
    let dir = TempDir::new()?;
    let config = quick_config(&dir)?;

    let output = exoctl()?
        .args(["run", "--ticks", "5", "--layout", "imu", "--material", "r", "--direction", "d", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let last = stdout.lines().last().unwrap_or_default();
    assert_eq!(last.split('\t').count(), 11);
    Ok(())
}

/// Lines printed between the calibration start line and the offset summary.
fn echoed_lines(stdout: &str) -> Option<usize> {
    let started = stdout
        .lines()
        .position(|line| line.starts_with("Calibration Started."))?;
    let finished = stdout
        .lines()
        .position(|line| line.starts_with("Calibration Finished"))?;
    finished.checked_sub(started + 1)
}

#[test]
fn test_run_echoes_calibration_samples() -> TestResult {
    let dir = TempDir::new()?;
    let quiet = quick_config(&dir)?;
    let output = exoctl()?
        .args(["run", "--ticks", "1", "--samples", "3", "--warmup", "2", "--config"])
        .arg(&quiet)
        .output()?;
    assert!(output.status.success());
    assert_eq!(echoed_lines(&String::from_utf8(output.stdout)?), Some(0));

    let loud = dir.path().join("echo.yaml");
    fs::write(
        &loud,
        "sampling_frequency_hz: 1000\nstream_delay_ms: 0\ncalibration:\n  samples: 3\n  warmup: 2\n  countdown_seconds: 0\n  settle_ms: 0\n",
    )?;
    let output = exoctl()?
        .args(["run", "--ticks", "1", "--config"])
        .arg(&loud)
        .output()?;
    assert!(output.status.success());
    assert_eq!(echoed_lines(&String::from_utf8(output.stdout)?), Some(5));
    Ok(())
}

#[test]
fn test_run_rejects_zero_samples() -> TestResult {
    exoctl()?
        .args(["run", "--samples", "0", "--ticks", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sample count"));
    Ok(())
}

#[test]
fn test_run_rejects_zero_frequency() -> TestResult {
    exoctl()?
        .args(["run", "--frequency", "0", "--ticks", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sampling frequency 0 Hz"));
    Ok(())
}

#[test]
fn test_missing_config_file() -> TestResult {
    exoctl()?
        .args(["config", "--config", "/nonexistent/exosense.yaml"])
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_config_dump_round_trips() -> TestResult {
    let dir = TempDir::new()?;
    let output = exoctl()?.arg("config").output()?;
    assert!(output.status.success());

    let dumped = dir.path().join("dumped.yaml");
    fs::write(&dumped, &output.stdout)?;
    exoctl()?
        .args(["config", "--config"])
        .arg(&dumped)
        .assert()
        .success()
        .stdout(String::from_utf8(output.stdout)?);
    Ok(())
}
