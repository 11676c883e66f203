//! Build information module
//!
//! Compile-time build metadata. It identifies this client to the report
//! backend (the HTTP user agent), stamps the footer of every rendered page
//! and prints the startup banner.

use serde::Serialize;

/// Build number from `build.rs`; 0 when built without it
pub const BUILD_NUMBER: u64 = match option_env!("BLOODWORK_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format (UTC)
pub const BUILD_TIMESTAMP: &str = match option_env!("BLOODWORK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Title shown in the startup banner
pub const PRODUCT_TITLE: &str = "Bloodwork - Blood Report Viewer";

/// Const function to parse u64 at compile time; empty input is not a number
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build information for this client
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    /// Build info of the running binary
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// `name/version (build N)`, sent as the user agent and shown in the page
    /// footer
    pub fn short(&self) -> String {
        format!("{}/{} (build {})", self.name, self.version, self.build_number)
    }

    /// Banner text, one entry per line
    pub fn banner_lines(&self) -> Vec<String> {
        let rule = "=".repeat(47);
        vec![
            rule.clone(),
            format!("  {}", PRODUCT_TITLE),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            rule,
        ]
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr, keeping stdout for chat output
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner_lines() {
        eprintln!("{}", line);
    }
}
