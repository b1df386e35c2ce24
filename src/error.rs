// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types
//!
//! In single-font mode every error propagates to the binary and terminates
//! the process. In batch mode errors are caught at the per-font boundary and
//! recorded as failed catalog entries; only setup errors (bad font directory,
//! unwritable output) abort a run.
//!
//! Degenerate vertical metrics are deliberately *not* an error: canvas
//! sizing clamps them and the quality check reports them (see
//! [`crate::canvas`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors arising from font loading, inspection and rendering
#[derive(Error, Debug)]
pub enum Error {
    /// The font file is missing or unreadable
    #[error("cannot read font file {path}: {source}")]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The font directory given to the indexer is missing or unreadable
    #[error("cannot read font directory {path}: {source}")]
    DirectoryNotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a parsable font
    #[error("cannot parse font file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ttf_parser::FaceParsingError,
    },

    /// The raster backend rejected the font
    #[error("font not usable for rastering: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),

    /// The requested character has no glyph and no fallback was selected
    #[error("character {0:?} is not mapped by this font")]
    CharacterNotMapped(char),

    /// The raster backend could not draw the requested text
    #[error("render failed: {0}")]
    Render(String),

    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
