use actuator_config::load_toml;
use rstest::rstest;

const GOOD: &str = r#"
[pins]
extend_switch = 17
shrink_switch = 27
extend_drive = 23
shrink_drive = 24
led_extend = 5
led_shrink = 6

[switches]
extend_active_high = false
shrink_active_high = false
debounce_ms = 20

[drive]
extend_active_high = true
shrink_active_high = true

[homing]
max_phase_ms = 15000
period_ms = 5

[logging]
level = "debug"
"#;

#[test]
fn full_config_parses_and_validates() {
    let cfg = load_toml(GOOD).expect("parse");
    cfg.validate().expect("validate");
    assert_eq!(cfg.pins.extend_switch, 17);
    assert_eq!(cfg.switches.debounce_ms, 20);
    assert_eq!(cfg.homing.max_phase_ms, 15_000);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
}

#[test]
fn minimal_config_gets_documented_defaults() {
    let cfg = load_toml(
        r#"
[pins]
extend_switch = 17
shrink_switch = 27
extend_drive = 23
shrink_drive = 24
"#,
    )
    .expect("parse");
    cfg.validate().expect("validate");
    assert!(!cfg.switches.extend_active_high);
    assert_eq!(cfg.switches.debounce_ms, 20);
    assert!(cfg.drive.extend_active_high);
    assert_eq!(cfg.homing.max_phase_ms, 0, "guard disabled by default");
    assert_eq!(cfg.homing.period_ms, 5);
    assert!(cfg.pins.led_extend.is_none());
}

#[test]
fn missing_pins_table_is_a_parse_error() {
    assert!(load_toml("[switches]\ndebounce_ms = 10\n").is_err());
}

#[rstest]
#[case("debounce_ms = 0", "[homing]\nperiod_ms = 5", "debounce_ms")]
#[case("debounce_ms = 20", "[homing]\nperiod_ms = 0", "period_ms")]
#[case("debounce_ms = 5", "[homing]\nperiod_ms = 10", "must not exceed")]
fn bad_timing_is_rejected(
    #[case] switches_line: &str,
    #[case] homing_table: &str,
    #[case] expected: &str,
) {
    let toml = format!(
        r#"
[pins]
extend_switch = 17
shrink_switch = 27
extend_drive = 23
shrink_drive = 24

[switches]
{switches_line}

{homing_table}
"#
    );
    let cfg = load_toml(&toml).expect("parse");
    let err = cfg.validate().expect_err("must fail validation");
    assert!(
        format!("{err}").contains(expected),
        "unexpected error: {err}"
    );
}

#[test]
fn duplicate_pin_assignment_is_rejected() {
    let cfg = load_toml(
        r#"
[pins]
extend_switch = 17
shrink_switch = 17
extend_drive = 23
shrink_drive = 24
"#,
    )
    .expect("parse");
    let err = cfg.validate().expect_err("duplicate pin must fail");
    assert!(format!("{err}").contains("same pin"));
}

#[test]
fn config_loads_from_a_file_on_disk() {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(GOOD.as_bytes()).expect("write");
    let text = std::fs::read_to_string(f.path()).expect("read");
    let cfg = load_toml(&text).expect("parse");
    cfg.validate().expect("validate");
}
