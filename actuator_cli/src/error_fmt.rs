//! Human-readable error descriptions and structured JSON error formatting.

use actuator_core::error::{ActuatorError, BuildError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingSwitches => {
                "What happened: No limit-switch port was provided to the control core.\nLikely causes: GPIO inputs failed to initialize or were not wired into the builder.\nHow to fix: Ensure the switch pins open successfully and are passed via with_switches(...).".to_string()
            }
            BuildError::MissingDrive => {
                "What happened: No drive port was provided to the control core.\nLikely causes: GPIO outputs failed to initialize or were not wired into the builder.\nHow to fix: Ensure the drive pins open successfully and are passed via with_drive(...).".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. See etc/actuator.toml for a sample."
            ),
        };
    }

    if let Some(ae) = err.downcast_ref::<ActuatorError>() {
        return match ae {
            ActuatorError::Hardware(msg) | ActuatorError::HardwareFault(msg) => format!(
                "What happened: A GPIO port failed ({msg}).\nLikely causes: Wrong pin numbers in [pins], wiring/power issues, or insufficient GPIO permissions.\nHow to fix: Check the config against the board wiring and ensure the process may access GPIO."
            ),
            ActuatorError::Config(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun."
            ),
            ActuatorError::State(msg) => format!(
                "What happened: {msg}.\nLikely causes: A limit switch never asserted (wedged carriage, broken switch) or the run was interrupted.\nHow to fix: Inspect the mechanics and switch wiring, then start a new run."
            ),
        };
    }

    // String-based heuristics for errors coming from init or config
    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("gpio") || lower.contains("pins") {
        return "What happened: Failed to initialize hardware pins.\nLikely causes: Incorrect pin numbers or insufficient GPIO permissions.\nHow to fix: Fix the [pins] values in the config; ensure the process has permission to access GPIO.".to_string();
    }

    if lower.contains("config") || lower.contains("toml") {
        return format!(
            "What happened: Configuration is invalid or incomplete.\nLikely causes: Missing [pins] table or out-of-range values.\nHow to fix: Edit the TOML config and try again. Original: {msg}"
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Map error categories to stable exit codes; unknown errors return 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if err.downcast_ref::<BuildError>().is_some() {
        return 2;
    }
    if let Some(ae) = err.downcast_ref::<ActuatorError>() {
        return match ae {
            ActuatorError::Hardware(_) | ActuatorError::HardwareFault(_) => 3,
            ActuatorError::State(_) => 4,
            ActuatorError::Config(_) => 2,
        };
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = if err.downcast_ref::<BuildError>().is_some() {
        "BuildError"
    } else if let Some(ae) = err.downcast_ref::<ActuatorError>() {
        match ae {
            ActuatorError::Hardware(_) => "Hardware",
            ActuatorError::HardwareFault(_) => "HardwareFault",
            ActuatorError::Config(_) => "Config",
            ActuatorError::State(_) => "State",
        }
    } else {
        "Error"
    };

    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
