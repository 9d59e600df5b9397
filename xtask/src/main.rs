//! Custom cargo commands for the opaque-facade crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Files that must keep their `INVARIANT:` markers.
const INVARIANT_FILES: &[&str] = &["facade.rs", "facade/imp.rs"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fmt + invariants + tests + clippy + docs)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("opaque-facade Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[2/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[3/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Building docs...");
    run_cargo(&["doc", "--no-deps", "--quiet"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

/// Workspace root: the nearest ancestor of this crate whose manifest
/// declares `[workspace]`.
fn project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    manifest_dir
        .ancestors()
        .skip(1)
        .find(|dir| {
            std::fs::read_to_string(dir.join("Cargo.toml"))
                .map(|manifest| manifest.contains("[workspace]"))
                .unwrap_or(false)
        })
        .map(Path::to_path_buf)
        .with_context(|| format!("No workspace manifest above {}", manifest_dir.display()))
}

/// The cargo that launched `cargo xtask`, so toolchain overrides carry over.
fn cargo_program() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let status = Command::new(cargo_program())
        .args(args)
        .current_dir(project_root()?)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => bail!("cargo {:?} exited with status {}", args, code),
        None => bail!("cargo {:?} was killed by a signal", args),
    }
}

/// Files under `src_dir` from `INVARIANT_FILES` that lack an `INVARIANT:` marker.
fn missing_invariant_markers(src_dir: &Path) -> Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for file in INVARIANT_FILES {
        let path = src_dir.join(file);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if !content.contains("INVARIANT:") {
            missing.push(*file);
        }
    }
    Ok(missing)
}

fn check_invariant_markers() -> Result<()> {
    let missing = missing_invariant_markers(&project_root()?.join("src"))?;

    if !missing.is_empty() {
        bail!(
            "{} lost their INVARIANT markers. Someone may have removed safety comments!",
            missing.join(", ")
        );
    }

    Ok(())
}
