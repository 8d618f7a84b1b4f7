//! CLI output formatting.
//!
//! Output is information-first: each shape is listed by its positional index
//! and the title it will carry in the library panel, with the source file as
//! an indented context line.
//!
//! ```text
//! Found 2 SVG files. Processing...
//! 001 AWS Lambda
//!     Source: icons/AWS-Lambda.svg
//! 002 AWS Simple Storage
//!     Source: icons/AWS-Simple-Storage.svg
//! Library successfully generated: aws-icons.mxlibrary (2 icons)
//! ```
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout (stderr for
//! warnings).

use crate::library::Library;
use crate::resolve::Skipped;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Shape header: index + title. Untitled shapes show the file name in parens.
fn shape_line(index: usize, title: &str, source: &Path) -> String {
    if title.is_empty() {
        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        format!("{} ({})", format_index(index), filename)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Message printed once input resolution succeeds.
pub fn format_found(count: usize) -> Vec<String> {
    vec![format!(
        "Found {}. Processing...",
        plural(count, "SVG file", "SVG files")
    )]
}

pub fn print_found(count: usize) {
    for line in format_found(count) {
        println!("{}", line);
    }
}

/// Warning for an input passed over during resolution.
pub fn format_skipped(skipped: &Skipped) -> Vec<String> {
    vec![format!("Warning: skipping: {}", skipped)]
}

/// Skips are warnings, so they go to stderr with the other diagnostics.
pub fn print_skipped(skipped: &Skipped) {
    for line in format_skipped(skipped) {
        eprintln!("{}", line);
    }
}

/// Shape listing and confirmation after the library has been written.
pub fn format_library_output(library: &Library, output: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(library.len() * 2 + 1);
    for (i, entry) in library.entries.iter().enumerate() {
        lines.push(shape_line(i + 1, &entry.record.title, &entry.source));
        lines.push(format!("    Source: {}", entry.source.display()));
    }
    lines.push(format!(
        "Library successfully generated: {} ({})",
        output.display(),
        plural(library.len(), "icon", "icons")
    ));
    lines
}

pub fn print_library_output(library: &Library, output: &Path) {
    for line in format_library_output(library, output) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{IconRecord, LibraryEntry};
    use std::path::PathBuf;

    fn entry(source: &str, title: &str) -> LibraryEntry {
        LibraryEntry {
            source: PathBuf::from(source),
            record: IconRecord::new(title.into(), "AA==".into(), 80, 80).unwrap(),
        }
    }

    #[test]
    fn found_message_counts_files() {
        assert_eq!(format_found(3), ["Found 3 SVG files. Processing..."]);
        assert_eq!(format_found(1), ["Found 1 SVG file. Processing..."]);
    }

    #[test]
    fn skipped_pattern_warning_names_pattern() {
        let source = glob::Pattern::new("extra[.svg").unwrap_err();
        let skipped = Skipped::InvalidPattern {
            pattern: "extra[.svg".into(),
            source,
        };
        let lines = format_skipped(&skipped);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Warning: skipping: Pattern \"extra[.svg\""));
    }

    #[test]
    fn library_output_lists_shapes_then_confirms() {
        let library = Library {
            entries: vec![
                entry("icons/AWS-Lambda.svg", "AWS Lambda"),
                entry("icons/a.svg", "a"),
            ],
        };
        let lines = format_library_output(&library, Path::new("custom.lib"));
        assert_eq!(
            lines,
            [
                "001 AWS Lambda",
                "    Source: icons/AWS-Lambda.svg",
                "002 a",
                "    Source: icons/a.svg",
                "Library successfully generated: custom.lib (2 icons)",
            ]
        );
    }

    #[test]
    fn untitled_shape_shows_filename() {
        let library = Library {
            entries: vec![entry("icons/.svg", "")],
        };
        let lines = format_library_output(&library, Path::new("out.mxlibrary"));
        assert_eq!(lines[0], "001 (.svg)");
        assert_eq!(
            lines.last().unwrap(),
            "Library successfully generated: out.mxlibrary (1 icon)"
        );
    }
}
