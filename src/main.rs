// src/main.rs

use clap::Parser;
use hostfacts::common::{env, log};
use hostfacts::core::{bootstrap, cli::Cli};
use std::process;

fn main() {
    env::load();
    log::init();

    let cli = Cli::parse();
    match bootstrap::run(&cli, &env::CONFIG) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            log::log(log::LogLevel::Error, &format!("✗ {}", e));
            process::exit(1);
        }
    }
}
