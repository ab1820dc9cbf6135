use std::path::Path;
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=TEXTPLACE_GIT_HASH={hash}");

    // Only plain checkouts are tracked; worktrees fall back to a rebuild per cargo invocation.
    let head = Path::new(".git").join("HEAD");
    if head.is_file() {
        println!("cargo:rerun-if-changed={}", head.display());
        println!("cargo:rerun-if-changed=build.rs");
    }
}
