//! Build script for chart-water-quality.
//!
//! Copies the observation summary CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. The header row is checked here so a
//! malformed fixture fails the build instead of the page load.

use std::env;
use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["parameter", "site", "year"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![("../fixtures/observations.csv", "observations.csv")];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            check_headers(src);
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}

fn check_headers(path: &Path) {
    let mut rdr = csv::Reader::from_path(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", path.display(), e));
    let headers = rdr
        .headers()
        .unwrap_or_else(|e| panic!("Failed to read headers of {}: {}", path.display(), e));
    let present: Vec<String> = headers.iter().map(|h| h.trim().to_ascii_lowercase()).collect();
    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|h| h == column) {
            panic!("{} is missing the '{}' column", path.display(), column);
        }
    }
}
