//! Display titles derived from icon filenames.
//!
//! Vendor icon packs name files with dashes and a brand prefix that is
//! sometimes glued to the name. The title is what the diagram editor shows
//! under each shape in the library panel:
//!
//! - `AWS-Simple-Storage.svg` → "AWS Simple Storage"
//! - `AWSLambda.svg` → "AWS Lambda"
//! - `Arch_Amazon-EC2_64.svg` → "Arch_Amazon EC2_64"
//! - `a.svg` → "a"
//!
//! Formatting never fails: any stem yields a title, possibly empty.

use regex::{NoExpand, Regex};
use std::path::Path;

/// Formats filename stems into library titles for one brand token.
#[derive(Debug, Clone)]
pub struct TitleFormatter {
    brand: String,
    brand_prefix: Option<Regex>,
    whitespace: Regex,
}

impl TitleFormatter {
    /// Build a formatter normalising `brand` at the start of titles.
    ///
    /// An empty brand disables prefix normalisation.
    pub fn new(brand: &str) -> Self {
        let brand_prefix = (!brand.is_empty()).then(|| {
            Regex::new(&format!(r"^{}\s*", regex::escape(brand)))
                .expect("escaped brand is a valid regex")
        });
        Self {
            brand: brand.to_string(),
            brand_prefix,
            whitespace: Regex::new(r"\s+").expect("static regex is valid"),
        }
    }

    /// Format a filename stem: dashes become spaces, a leading brand token is
    /// followed by exactly one space, and whitespace runs collapse to one space.
    pub fn format(&self, stem: &str) -> String {
        let spaced = stem.replace('-', " ");
        let branded = match &self.brand_prefix {
            Some(prefix) => {
                let normalised = format!("{} ", self.brand);
                prefix.replace(&spaced, NoExpand(&normalised)).into_owned()
            }
            None => spaced,
        };
        self.whitespace.replace_all(&branded, " ").into_owned()
    }

    /// Title for an icon file: the path's stem (no directories, no extension), formatted.
    pub fn title_for_path(&self, path: &Path) -> String {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.format(&stem)
    }
}

impl Default for TitleFormatter {
    fn default() -> Self {
        Self::new("AWS")
    }
}
