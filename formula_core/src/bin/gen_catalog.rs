//! Generate CATALOG.md from the formula catalog.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog
//! cargo run --bin gen-catalog -- /tmp/CATALOG.md
//! ```
//!
//! Without an argument the file is written next to this crate's manifest
//! (`formula_core/CATALOG.md`), whatever the working directory is.

use std::fs;
use std::path::PathBuf;

use formula_core::generate_catalog_markdown;

const DEFAULT_OUTPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/CATALOG.md");

/// Output path: the first argument if given, else the crate's CATALOG.md
fn output_path(arg: Option<String>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn main() {
    println!("Generating CATALOG.md...");

    let markdown = generate_catalog_markdown();
    let output_path = output_path(std::env::args().nth(1));

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_output_is_inside_crate() {
        let path = output_path(None);
        assert!(path.is_absolute(), "{} should not depend on the working directory", path.display());
        assert_eq!(path.parent().unwrap(), Path::new(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(path.file_name().unwrap(), "CATALOG.md");
    }

    #[test]
    fn test_argument_overrides_output() {
        assert_eq!(output_path(Some("out/CATALOG.md".into())), PathBuf::from("out/CATALOG.md"));
    }
}
