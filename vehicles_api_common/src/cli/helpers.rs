//! Helper functions that are common to the probe apps

use std::env;

/// **Initializes the logger**
///
/// Logs go to stderr; the report itself goes to stdout.
/// Without `RUST_LOG`, defaults to `info` for the given crate.
pub fn init_logger(crate_name: &str) {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", format!("{crate_name}=info"));
    }
    pretty_env_logger::init();
}

/// **A section heading, preceded by an empty line**
pub fn section_banner(title: &str) -> String {
    format!("\n--- {title} ---")
}

/// **Prints report lines to stdout.**
pub fn print_report(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// **Pretty-prints JSON with a two-space indent.**
///
/// Falls back to the compact form should serialization ever fail.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
