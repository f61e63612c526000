//! Development automation tasks for the `AssetDesk` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::{Command, ExitCode, ExitStatus};
use std::{env, fs};

use anyhow::{anyhow, Context};
use serde_json::{json, Value};

const SAMPLE_SNAPSHOT_PATH: &str = "target/sample-snapshot.json";

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("check-cli") => verify_cli(),
        Some("sample-snapshot") => write_sample_snapshot(env::args().nth(2)),
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
    println!("AssetDesk Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, check-cli, test, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    check-cli Verify the assetdesk binary compiles");
    println!("    test      Run all tests");
    println!("    sample-snapshot [PATH]  Write a demo snapshot (default target/sample-snapshot.json)");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/6: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/6: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/6: Verifying the assetdesk binary...");
    verify_cli()?;

    println!("\n==> Step 4/6: Running tests...");
    run_test()?;

    println!("\n==> Step 5/6: Checking dependencies...");
    run_deny()?;

    println!("\n==> Step 6/6: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    let status = cargo(&["fmt", "--all", "--", "--check"])?;

    if !status.success() {
        anyhow::bail!("Format check failed. Run 'cargo fmt --all' to fix.");
    }

    Ok(())
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    let status = cargo(&["clippy", "--workspace", "--all-targets"])?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("Clippy run failed. See output above."))
    }
}

/// Verify the application crate and its `assetdesk` binary compile
fn verify_cli() -> anyhow::Result<()> {
    println!("Checking assetdesk-app compiles...");
    let status = cargo(&["check", "-p", "assetdesk-app", "--bins"])?;

    if !status.success() {
        anyhow::bail!("assetdesk-app check failed");
    }

    println!("✓ assetdesk binary compiles successfully");
    Ok(())
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    let status = cargo(&["test", "--workspace"])?;

    if !status.success() {
        anyhow::bail!("Tests failed");
    }

    Ok(())
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    run_cargo_plugin("deny", &["check"], "cargo-deny found issues")
}

/// Audit dependencies for security vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    run_cargo_plugin("audit", &[], "cargo-audit found vulnerabilities")
}

/// Run `cargo <plugin> <args>` after checking the plugin is installed.
fn run_cargo_plugin(plugin: &str, args: &[&str], failure: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([plugin, "--version"])
        .output()
        .is_ok_and(|o| o.status.success());
    if !installed {
        eprintln!("cargo-{plugin} is not installed.");
        eprintln!("Install it with: cargo install cargo-{plugin}");
        anyhow::bail!("cargo-{plugin} not found");
    }

    let status = Command::new("cargo").arg(plugin).args(args).status()?;
    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}

fn cargo(args: &[&str]) -> std::io::Result<ExitStatus> {
    Command::new("cargo").args(args).status()
}

/// Write a small document store export the CLI can be pointed at.
fn write_sample_snapshot(path: Option<String>) -> anyhow::Result<()> {
    let path = PathBuf::from(path.unwrap_or_else(|| SAMPLE_SNAPSHOT_PATH.to_string()));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let document = sample_document();
    fs::write(&path, serde_json::to_string_pretty(&document)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Wrote sample snapshot to {}", path.display());
    println!(
        "  Try: ASSETDESK_SNAPSHOT_PATH={} cargo run -p assetdesk-app -- stats",
        path.display()
    );
    Ok(())
}

fn sample_document() -> Value {
    json!({
        "คำขอแจ้งซ่อม": {
            "-s1": {
                "รหัสหัวเรื่อง": "NET",
                "ห้อง": "501",
                "รายละเอียดคำขอแจ้งซ่อม": "Wi-Fi drops every few minutes",
                "วันที่เวลาแจ้ง": "2024-03-01T08:00:00Z",
                "สถานะการซ่อม": "ซ่อมเสร็จแล้ว",
                "วันที่เวลาซ่อมเสร็จ": "2024-03-01T10:30:00Z",
                "หมายเลขครุภัณฑ์": "7440-001-0001",
                "รายการ": "Access point",
                "อีเมลผู้รับเรื่อง": "tech@example.org"
            },
            "-s2": {
                "รหัสหัวเรื่อง": "AV",
                "ห้อง": "Auditorium",
                "รายละเอียดคำขอแจ้งซ่อม": "Projector image is dim",
                "วันที่เวลาแจ้ง": "2024-03-04T09:15:00Z",
                "สถานะการซ่อม": "กำลังดำเนินการ",
                "หมายเลขครุภัณฑ์": "6730-002-0007",
                "รายการ": "Projector",
                "อีเมลผู้รับเรื่อง": "av@example.org"
            },
            "-s3": {
                "รหัสหัวเรื่อง": "NET",
                "ห้อง": "502",
                "วันที่เวลาแจ้ง": "2024-03-05T13:00:00Z",
                "สถานะการซ่อม": "แจ้งซ่อม",
                "รายการ": "Switch"
            }
        },
        "หัวเรื่อง": {
            "-t1": { "รหัสหัวเรื่อง": "NET", "ชื่อหัวเรื่อง": "ระบบเครือข่าย" },
            "-t2": { "รหัสหัวเรื่อง": "AV", "ชื่อหัวเรื่อง": "โสตทัศนูปกรณ์" }
        },
        "ผู้ใช้งาน": {
            "-u1": { "อีเมล": "tech@example.org", "ชื่อ": "Somchai", "ตำแหน่ง": "ช่างเทคนิค" },
            "-u2": { "อีเมล": "av@example.org", "ชื่อ": "Suda", "ตำแหน่ง": "นักวิชาการโสตทัศนศึกษา" }
        }
    })
}
