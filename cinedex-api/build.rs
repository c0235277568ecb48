//! Stamps the cinedex-api binary with the commit, build time and cargo
//! profile it was built from. The values surface in the startup banner
//! and on the dashboard footer via `/api/buildinfo`.

use std::process::Command;

/// Run a git subcommand, returning trimmed stdout on success
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// Short commit hash, suffixed `-dirty` when the working tree has edits
fn commit_id() -> String {
    let Some(hash) = git(&["rev-parse", "--short=8", "HEAD"]) else {
        return "unknown".to_string();
    };
    match git(&["status", "--porcelain", "--untracked-files=no"]) {
        Some(changes) if !changes.is_empty() => format!("{}-dirty", hash),
        _ => hash,
    }
}

fn main() {
    let stamp = [
        ("GIT_HASH", commit_id()),
        (
            "BUILD_TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        (
            "BUILD_PROFILE",
            std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
        ),
    ];

    // No rerun-if-changed: the script reruns on every build so the stamp stays current
    for (key, value) in stamp {
        println!("cargo:rustc-env={}={}", key, value);
    }
}
