//! Build script for Bloodwork
//!
//! Embeds a build number and timestamp. The number comes from
//! `BLOODWORK_BUILD_NUMBER` when the environment sets it (CI builds),
//! otherwise from a local counter in `build_number.txt` that is bumped on
//! every recompilation.

use std::env;
use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn next_local_build() -> u64 {
    let path = Path::new(COUNTER_FILE);
    let current: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let next = current + 1;

    // Packaged sources are read-only; the build still goes ahead
    if let Err(e) = fs::write(path, next.to_string()) {
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }
    next
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=BLOODWORK_BUILD_NUMBER");

    let build: u64 = match env::var("BLOODWORK_BUILD_NUMBER") {
        Ok(pinned) => pinned.trim().parse().unwrap_or_else(|_| {
            println!("cargo:warning=ignoring non-numeric BLOODWORK_BUILD_NUMBER {:?}", pinned);
            next_local_build()
        }),
        Err(_) => next_local_build(),
    };

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=BLOODWORK_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=BLOODWORK_BUILD_TIMESTAMP={}", timestamp);
}
