// src/core/bootstrap.rs

use crate::common::env::Config;
use crate::common::log::{log, LogLevel};
use crate::core::capability::Capabilities;
use crate::core::cli::Cli;
use crate::core::error::Result;
use crate::core::probe::Probe;
use crate::core::report::EnvironmentReport;
use crate::modules::packages::freeze::PackageManager;

// Runs the command selected on the command line and returns what to print.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    log(
        LogLevel::Debug,
        &format!(
            "➜ hostfacts {} ({})",
            env!("CARGO_PKG_VERSION"),
            option_env!("HOSTFACTS_TARGET").unwrap_or("unknown target")
        ),
    );

    let caps = Capabilities::from_config(config);
    if !caps.memory_reporting {
        log(LogLevel::Warn, "➜ Memory reporting unavailable, using N/A");
    }

    if cli.packages {
        return list_packages(cli, config);
    }
    if let Some(fragment) = &cli.find {
        let drives = caps.drives.drives()?;
        return Ok(match drives.find(fragment) {
            Some(root) => root.display().to_string(),
            None => {
                log(
                    LogLevel::Warn,
                    &format!("✗ Unable to find {} on any drive", fragment.display()),
                );
                String::new()
            }
        });
    }

    let report = EnvironmentReport::select(&caps, cli.categories());
    log(
        LogLevel::Debug,
        &format!("✓ Collecting {}", report.categories().join(", ")),
    );

    if cli.json {
        let export = report.export()?;
        return Ok(to_pretty_json(&serde_json::Value::Object(export)));
    }
    Ok(report.render()?.trim_end().to_string())
}

fn list_packages(cli: &Cli, config: &Config) -> Result<String> {
    let manager = PackageManager::from_command_line(&config.package_command).unwrap_or_default();
    log(
        LogLevel::Debug,
        &format!("➜ Listing packages with `{}`", manager.command_line()),
    );

    let packages = manager.list()?;
    log(
        LogLevel::Info,
        &format!("✓ Found {} installed packages", packages.len()),
    );

    if cli.json {
        return Ok(to_pretty_json(&packages.to_value()));
    }
    Ok(packages.render()?.trim_end().to_string())
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    // Serializing a Value cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
