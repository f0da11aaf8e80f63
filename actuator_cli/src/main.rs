//! actuator CLI entry point: config loading, logging setup, dispatch.

mod cli;
mod error_fmt;
mod run;

use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::WrapErr;

use crate::cli::{Cli, Commands, FILE_GUARD, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};
use crate::run::{Goal, RunReport};

fn main() -> ExitCode {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    match real_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if *JSON_MODE.get().unwrap_or(&false) {
                eprintln!("{}", format_error_json(&err));
            } else {
                eprintln!("{}", humanize(&err));
            }
            ExitCode::from(u8::try_from(exit_code_for_error(&err)).unwrap_or(1))
        }
    }
}

fn real_main(cli: &Cli) -> eyre::Result<()> {
    let text = fs::read_to_string(&cli.config)
        .wrap_err_with(|| format!("reading config {}", cli.config.display()))?;
    let cfg = actuator_config::load_toml(&text)
        .map_err(|e| actuator_core::ActuatorError::Config(e.to_string()))
        .wrap_err("parsing config TOML")?;
    cfg.validate()
        .map_err(|e| actuator_core::ActuatorError::Config(e.to_string()))
        .wrap_err("invalid configuration")?;

    init_logging(&cli.log_level, &cfg.logging);

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst))
            .wrap_err("installing ctrl-c handler")?;
    }

    let (goal, max_run_ms) = match cli.cmd {
        Commands::Home { max_run_ms } => (Goal::Home, max_run_ms),
        Commands::Extend { max_run_ms } => (Goal::Extend, max_run_ms),
        Commands::Shrink { max_run_ms } => (Goal::Shrink, max_run_ms),
    };

    let report = run::run(&cfg, goal, max_run_ms, cli.sim_travel_ms, &shutdown)?;
    print_report(goal, &report, cli.json);
    Ok(())
}

fn print_report(goal: Goal, report: &RunReport, json: bool) {
    if json {
        let obj = serde_json::json!({
            "command": goal.name(),
            "elapsed_ms": report.elapsed_ms,
            "extend_travel_ms": report.extend_travel_ms,
            "shrink_travel_ms": report.shrink_travel_ms,
        });
        println!("{obj}");
        return;
    }
    match goal {
        Goal::Home => println!(
            "homing complete in {} ms: extend travel {} ms, shrink travel {} ms",
            report.elapsed_ms, report.extend_travel_ms, report.shrink_travel_ms
        ),
        Goal::Extend | Goal::Shrink => println!(
            "{} complete in {} ms",
            goal.name(),
            report.elapsed_ms
        ),
    }
}

fn init_logging(cli_level: &str, logging: &actuator_config::Logging) {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // An explicit CLI flag wins over the config's level; RUST_LOG wins over both.
    let level = if cli_level == "info" {
        logging.level.as_deref().unwrap_or(cli_level)
    } else {
        cli_level
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = logging.file.as_ref().map(|path| {
        let rotation = match logging.rotation.as_deref() {
            Some("daily") => Rotation::DAILY,
            Some("hourly") => Rotation::HOURLY,
            _ => Rotation::NEVER,
        };
        let path = std::path::Path::new(path);
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let name = path
            .file_name()
            .map_or_else(|| "actuator.log".into(), |n| n.to_os_string());
        let appender =
            RollingFileAppender::new(rotation, dir.unwrap_or(std::path::Path::new(".")), name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        fmt::layer().json().with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .init();
}
