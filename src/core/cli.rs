// src/core/cli.rs

use crate::core::report::Categories;
use clap::Parser;
use std::path::PathBuf;

/// A lightweight utility for retrieving system information and specifications.
#[derive(Debug, Parser)]
#[command(name = "hostfacts", version)]
pub struct Cli {
    /// All available system information
    #[arg(short, long)]
    pub all: bool,

    /// Runtime information such as the compiler version and toolchain
    #[arg(short, long)]
    pub runtime: bool,

    /// Software related information such as operating system, machine type, username, etc.
    #[arg(short, long)]
    pub system: bool,

    /// Hardware related information such as memory and processor information
    #[arg(short = 'H', long)]
    pub hardware: bool,

    /// Print the structured export as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// List installed packages instead of the environment report
    #[arg(long, conflicts_with = "find")]
    pub packages: bool,

    /// Print the first drive holding PATH (Windows only)
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["all", "runtime", "system", "hardware", "json"]
    )]
    pub find: Option<PathBuf>,
}

impl Cli {
    pub fn categories(&self) -> Categories {
        if self.all {
            return Categories::all();
        }
        Categories {
            runtime: self.runtime,
            system: self.system,
            hardware: self.hardware,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hostfacts").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_selects_nothing_explicitly() {
        assert_eq!(parse(&[]).categories(), Categories::default());
    }

    #[test]
    fn all_wins_over_individual_flags() {
        assert_eq!(parse(&["-a", "-s"]).categories(), Categories::all());
    }

    #[test]
    fn individual_flags_combine() {
        let categories = parse(&["-r", "-H"]).categories();
        assert!(categories.runtime && categories.hardware && !categories.system);
    }

    #[test]
    fn packages_and_find_conflict() {
        let result = Cli::try_parse_from(["hostfacts", "--packages", "--find", "data"]);
        assert!(result.is_err());
    }

    #[test]
    fn find_refuses_report_flags() {
        for flag in ["-a", "-r", "-s", "-H", "--json"] {
            let result = Cli::try_parse_from(["hostfacts", "--find", "data", flag]);
            let err = result.expect_err(flag);
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{flag}");
        }
    }

    #[test]
    fn find_alone_parses() {
        let cli = parse(&["--find", "data"]);
        assert_eq!(cli.find, Some(PathBuf::from("data")));
    }
}
