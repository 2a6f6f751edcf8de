// build.rs
use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    // Cargo always hands us the compiler it is using.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let compiler = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default();

    // "rustc 1.82.0 (f6e511eec 2024-10-15)" -> "1.82.0"
    let version = compiler
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    if !compiler.is_empty() {
        println!("cargo:rustc-env=HOSTFACTS_RUSTC_COMPILER={}", compiler);
    }
    if !version.is_empty() {
        println!("cargo:rustc-env=HOSTFACTS_RUSTC_VERSION={}", version);
    }
    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=HOSTFACTS_TARGET={}", target);
    }
}
