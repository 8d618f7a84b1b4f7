//! Input resolution: glob patterns → icon file list.
//!
//! Patterns are expanded in the order given, each pattern's matches in the
//! order the `glob` crate yields them (sorted per directory). Directories are
//! skipped, and a path matched by several patterns is kept only at its first
//! position. Hidden files need an explicit leading dot in the pattern, the
//! same as a shell.
//!
//! A pattern that matches nothing is fine, and so is one that is not valid
//! glob syntax or walks into an unreadable directory: those are reported to
//! the caller and skipped. Only an empty overall result is an error.

use glob::MatchOptions;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No SVG files found for the provided patterns.")]
    NoMatches,
}

/// Input that was passed over during resolution without failing the run.
#[derive(Error, Debug)]
pub enum Skipped {
    #[error("Pattern {pattern:?} is not a valid glob and names no file: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("Cannot read {}: {}", .0.path().display(), .0.error())]
    Unreadable(glob::GlobError),
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand `patterns` into a deduplicated list of regular files.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, ResolveError> {
    resolve_patterns_with(patterns, |_| {})
}

/// Like [`resolve_patterns`], reporting each skipped input to `on_skip`.
///
/// A pattern the glob syntax rejects (an unclosed `[`, say) is taken as a
/// literal path instead. Entries the walker cannot read are skipped.
pub fn resolve_patterns_with(
    patterns: &[String],
    mut on_skip: impl FnMut(Skipped),
) -> Result<Vec<PathBuf>, ResolveError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    let mut push = |path: PathBuf| {
        if path.is_file() && seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for pattern in patterns {
        match glob::glob_with(pattern, MATCH_OPTIONS) {
            Ok(paths) => {
                for entry in paths {
                    match entry {
                        Ok(path) => push(path),
                        Err(e) => on_skip(Skipped::Unreadable(e)),
                    }
                }
            }
            Err(_) if Path::new(pattern).is_file() => push(PathBuf::from(pattern)),
            Err(source) => on_skip(Skipped::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }),
        }
    }

    if files.is_empty() {
        return Err(ResolveError::NoMatches);
    }
    Ok(files)
}
