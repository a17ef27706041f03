//! Development automation tasks for the `ShiftClock` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::anyhow;

mod features;

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("test-features") => features::test_feature_matrix(),
        Some("demo") => run_demo(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("ShiftClock Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, test, features, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    test      Run all tests");
    println!("    test-features  Verify shiftclock-common feature tiers build and pass");
    println!("    demo      Run the shiftclock binary on demos/session.json");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/7: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/7: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/7: Verifying binary crate (shiftclock-app)...");
    verify_app_crate()?;

    println!("\n==> Step 4/7: Running tests...");
    run_test()?;

    println!("\n==> Step 5/7: Checking feature tiers...");
    features::test_feature_matrix()?;

    println!("\n==> Step 6/7: Checking dependencies...");
    run_deny()?;

    println!("\n==> Step 7/7: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["fmt", "--all", "--", "--check"]).status()?;

    if !status.success() {
        anyhow::bail!("Format check failed. Run 'cargo fmt --all' to fix.");
    }

    Ok(())
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    let status =
        Command::new("cargo").args(["clippy", "--all-targets", "--all-features"]).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("Clippy run failed. See output above."))
    }
}

/// Verify the binary crate compiles
fn verify_app_crate() -> anyhow::Result<()> {
    println!("Checking shiftclock-app compiles...");
    let status = Command::new("cargo").args(["check", "-p", "shiftclock-app"]).status()?;

    if !status.success() {
        anyhow::bail!("shiftclock-app check failed");
    }

    println!("✓ shiftclock-app compiles successfully");
    Ok(())
}

/// Run the binary against the bundled demo session
fn run_demo() -> anyhow::Result<()> {
    let timezone =
        env::var("SHIFTCLOCK_COMPANY_TIMEZONE").unwrap_or_else(|_| "America/New_York".to_string());

    let status = Command::new("cargo")
        .args(["run", "-p", "shiftclock-app", "--", "demos/session.json", "--ticks", "3"])
        .env("SHIFTCLOCK_COMPANY_TIMEZONE", timezone)
        .status()?;

    if !status.success() {
        anyhow::bail!("demo run failed");
    }

    Ok(())
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["test", "--workspace", "--all-features"]).status()?;

    if !status.success() {
        anyhow::bail!("Tests failed");
    }

    Ok(())
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    // Check if cargo-deny is installed
    let check_installed = Command::new("cargo").args(["deny", "--version"]).output();

    if check_installed.is_err() || !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("cargo-deny is not installed.");
        eprintln!("Install it with: cargo install cargo-deny");
        anyhow::bail!("cargo-deny not found");
    }

    let status = Command::new("cargo").args(["deny", "check"]).status()?;

    if !status.success() {
        anyhow::bail!("cargo-deny found issues");
    }

    Ok(())
}

/// Audit dependencies for security vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    // Check if cargo-audit is installed
    let check_installed = Command::new("cargo").args(["audit", "--version"]).output();

    if check_installed.is_err() || !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("cargo-audit is not installed.");
        eprintln!("Install it with: cargo install cargo-audit");
        anyhow::bail!("cargo-audit not found");
    }

    let status = Command::new("cargo").args(["audit"]).status()?;

    if !status.success() {
        anyhow::bail!("cargo-audit found vulnerabilities");
    }

    Ok(())
}
