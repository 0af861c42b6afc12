use std::process::Command;

fn main() {
    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = env!("CARGO_PKG_VERSION");

    let hash = git(&["rev-parse", "--short", "HEAD"]);
    let is_dirty = git(&["status", "--porcelain"]).is_some();

    // `-V` prints the plain crate version, `--version` adds the commit.
    let long_version = match hash {
        Some(hash) if is_dirty => format!("{} ({}-dirty)", version, hash),
        Some(hash) => format!("{} ({})", version, hash),
        None => version.to_string(),
    };

    println!("cargo:rustc-env=USERSTORE_LONG_VERSION={}", long_version);
}

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
