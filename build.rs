use std::env;
use std::fs;

const FALLBACK_VERSION: &str = "0.1.0";

fn main() {
    // QRELEASE_VERSION wins, then a VERSION file at the crate root
    let version = env::var("QRELEASE_VERSION")
        .ok()
        .or_else(|| fs::read_to_string("VERSION").ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_VERSION.to_string());

    println!("cargo:rustc-env=QRELEASE_VERSION={version}");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=QRELEASE_VERSION");
}
