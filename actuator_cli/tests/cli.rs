use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Fast timings so the simulated runs finish in well under a second.
const CFG: &str = r#"
[pins]
extend_switch = 17
shrink_switch = 27
extend_drive = 23
shrink_drive = 24

[switches]
debounce_ms = 5

[homing]
period_ms = 2
"#;

fn write_cfg(text: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(text.as_bytes()).expect("write config");
    f
}

fn actuator_cmd(cfg: &tempfile::NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("actuator").expect("binary");
    cmd.args(["--config", cfg.path().to_str().expect("utf8 path")]);
    cmd.args(["--sim-travel-ms", "200"]);
    cmd
}

#[test]
fn home_reports_measured_travel_times() {
    let cfg = write_cfg(CFG);
    actuator_cmd(&cfg)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("homing complete"))
        .stdout(predicate::str::contains("extend travel"));
}

#[test]
fn home_json_output_is_structured() {
    let cfg = write_cfg(CFG);
    let out = actuator_cmd(&cfg)
        .args(["--json", "home"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("stdout is JSON");
    assert_eq!(v["command"], "home");
    // The simulated travel is 200 ms; measurements include debounce latency.
    let extend = v["extend_travel_ms"].as_u64().expect("extend_travel_ms");
    assert!((200..400).contains(&extend), "extend travel {extend} ms");
    assert!(v["shrink_travel_ms"].as_u64().expect("shrink_travel_ms") > 0);
}

#[test]
fn extend_drives_to_the_limit_and_stops() {
    let cfg = write_cfg(CFG);
    actuator_cmd(&cfg)
        .arg("extend")
        .assert()
        .success()
        .stdout(predicate::str::contains("extend complete"));
}

#[test]
fn duplicate_pins_fail_with_the_config_exit_code() {
    let cfg = write_cfg(
        r#"
[pins]
extend_switch = 17
shrink_switch = 17
extend_drive = 23
shrink_drive = 24
"#,
    );
    actuator_cmd(&cfg)
        .arg("home")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn a_run_that_cannot_finish_times_out_with_the_state_exit_code() {
    let cfg = write_cfg(CFG);
    actuator_cmd(&cfg)
        .args(["home", "--max-run-ms", "30"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("max_run_ms"));
}

#[test]
fn missing_config_file_is_reported() {
    let mut cmd = Command::cargo_bin("actuator").expect("binary");
    cmd.args(["--config", "/nonexistent/actuator.toml", "home"]);
    cmd.assert().failure().stderr(predicate::str::contains("reading config"));
}
