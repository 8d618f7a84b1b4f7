//! Library records and the `.mxlibrary` document.
//!
//! A draw.io library file is a JSON array wrapped in a single root element:
//!
//! ```text
//! <mxlibrary>[{"title":"AWS Lambda","xml":"<payload>","w":80,"h":80}, ...]</mxlibrary>
//! ```
//!
//! One record is built per resolved icon file, in resolution order. Building
//! stops at the first unreadable file, and nothing is written unless every
//! record was built.

use crate::config::LibraryConfig;
use crate::encode::{self, EncodeError};
use crate::naming::TitleFormatter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Shape size must be non-zero, got {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("Not a library document: missing <mxlibrary> wrapper")]
    MissingWrapper,
}

/// One shape in the library panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Label shown under the shape.
    pub title: String,
    /// Compressed graph model, see [`encode::encode_shape`].
    pub xml: String,
    pub w: u32,
    pub h: u32,
}

impl IconRecord {
    pub fn new(title: String, xml: String, w: u32, h: u32) -> Result<Self, LibraryError> {
        if w == 0 || h == 0 {
            return Err(LibraryError::InvalidSize(w, h));
        }
        Ok(Self { title, xml, w, h })
    }
}

/// A built record together with the file it came from.
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    pub source: PathBuf,
    pub record: IconRecord,
}

/// Build the record for one icon file.
///
/// The size is the configured shape size, not the icon's own dimensions, so
/// every shape drops onto the canvas at the same grid size.
pub fn build_record(
    path: &Path,
    config: &LibraryConfig,
    titles: &TitleFormatter,
) -> Result<IconRecord, LibraryError> {
    let content = fs::read_to_string(path).map_err(|source| LibraryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let shape = &config.shape;
    let xml = encode::encode_shape(&content, &shape.media_type, shape.width, shape.height)?;
    IconRecord::new(titles.title_for_path(path), xml, shape.width, shape.height)
}

/// Ordered collection of library entries, one per input file.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub entries: Vec<LibraryEntry>,
}

impl Library {
    /// Build a record for every path, in order. Fails on the first error.
    pub fn build(paths: &[PathBuf], config: &LibraryConfig) -> Result<Self, LibraryError> {
        let titles = TitleFormatter::new(&config.title.brand);
        let entries = paths
            .iter()
            .map(|path| -> Result<LibraryEntry, LibraryError> {
                Ok(LibraryEntry {
                    source: path.clone(),
                    record: build_record(path, config, &titles)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &IconRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Serialize to the `.mxlibrary` document text.
    pub fn to_mxlibrary(&self) -> Result<String, LibraryError> {
        let records: Vec<&IconRecord> = self.records().collect();
        let json = serde_json::to_string(&records)?;
        Ok(format!("<mxlibrary>{json}</mxlibrary>"))
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), LibraryError> {
        let document = self.to_mxlibrary()?;
        fs::write(path, document).map_err(|source| LibraryError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parse a `.mxlibrary` document back into its records.
pub fn parse_mxlibrary(document: &str) -> Result<Vec<IconRecord>, LibraryError> {
    let json = document
        .trim()
        .strip_prefix("<mxlibrary>")
        .and_then(|rest| rest.strip_suffix("</mxlibrary>"))
        .ok_or(LibraryError::MissingWrapper)?;
    Ok(serde_json::from_str(json)?)
}
