//! # mxlibrary
//!
//! Packages a set of SVG icons into a single draw.io shape library
//! (`.mxlibrary`). Each icon becomes one draggable shape whose image is
//! embedded in the library, so the file is self-contained.
//!
//! # Pipeline
//!
//! ```text
//! 1. Resolve    patterns  →  icon paths     (glob, dedup, files only)
//! 2. Build      paths     →  IconRecord[]   (title + compressed graph model)
//! 3. Serialize  records   →  <mxlibrary>[...]</mxlibrary>
//! 4. Write      document  →  output file    (overwrite)
//! ```
//!
//! Every stage runs once, in order, and any error aborts the run before the
//! output file is touched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | Stage 1 — expands glob patterns into an ordered, deduplicated file list |
//! | [`library`] | Stages 2–4 — `IconRecord`, `Library`, document serialization and writing |
//! | [`encode`] | Data URI, graph model template, and the deflate/base64 payload codec |
//! | [`naming`] | Filename → display title formatting |
//! | [`config`] | Optional TOML config: default output, brand token, shape size, media type |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod encode;
pub mod library;
pub mod naming;
pub mod output;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
