//! Shared test utilities for the mxlibrary test suite.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = setup_icons(&["AWS-Lambda.svg", "Arch_Compute/EC2.svg"]);
//! let files = resolve_patterns(&[pattern(tmp.path(), "**/*.svg")]).unwrap();
//! ```

use std::path::Path;
use tempfile::TempDir;

/// Minimal SVG body written for a fixture icon, unique per relative path.
pub fn svg_for(name: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><title>{name}</title><rect width="64" height="64"/></svg>"#
    )
}

/// Create a temp directory holding one SVG per relative path in `names`.
///
/// Parent directories are created as needed.
pub fn setup_icons(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        let path = tmp.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, svg_for(name)).unwrap();
    }
    tmp
}

/// Glob pattern string rooted at `dir`.
pub fn pattern(dir: &Path, glob: &str) -> String {
    dir.join(glob).to_string_lossy().into_owned()
}
