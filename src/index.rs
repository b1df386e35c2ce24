// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Batch catalog of a font directory
//!
//! Discovery walks the font directory recursively, collecting `.ttf` and
//! `.otf` files (case-insensitive), sorted by path so results are
//! independent of directory iteration order. Each font is then opened,
//! quality-checked, rendered to a thumbnail and recorded as an
//! [`IndexEntry`]; the face handle is dropped before the next file.
//!
//! Per-font failures (unreadable file, parse error, render error) are
//! converted into failed entries and the run continues. Only setup errors —
//! missing font directory, uncreatable output directory, unwritable HTML
//! file — abort a run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::RenderSpec;
use crate::error::{Error, Result};
use crate::face::{FontFace, NameInfo};
use crate::quality::{self, Quality};
use crate::{html, raster};

/// Configuration for one indexing run
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Directory searched (recursively) for font files
    pub font_dir: PathBuf,
    /// Directory thumbnails are written to; created if missing
    pub output_dir: PathBuf,
    /// Path of the generated HTML page
    pub html_file: PathBuf,
    /// Sample text rendered for each font
    pub text: String,
    /// Pixels per Em for thumbnails
    pub font_size: u32,
    /// Also run the slow quality check
    pub slow_check: bool,
    /// Process at most this many fonts
    pub limit: Option<usize>,
}

/// How far one font got
#[derive(Clone, Debug)]
pub enum EntryStatus {
    /// Thumbnail rendered; path as referenced from the HTML page
    Rendered { image: PathBuf },
    /// Font could not be processed
    Failed { reason: String },
}

/// One row of the catalog; immutable once created
#[derive(Clone, Debug)]
pub struct IndexEntry {
    pub path: PathBuf,
    pub names: NameInfo,
    pub quality: Quality,
    pub status: EntryStatus,
}

impl IndexEntry {
    pub fn is_rendered(&self) -> bool {
        matches!(self.status, EntryStatus::Rendered { .. })
    }
}

/// Counts reported after a run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexSummary {
    /// Fonts discovered (after the limit was applied)
    pub total: usize,
    /// Fonts with a thumbnail in the catalog
    pub rendered: usize,
    /// Rendered fonts flagged by a quality check
    pub flagged: usize,
    /// Fonts recorded as failed
    pub failed: usize,
}

/// Recursively collect font files under `dir`, sorted by path
pub fn discover_fonts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    collect(dir, &mut fonts).map_err(|source| Error::DirectoryNotReadable {
        path: dir.to_owned(),
        source,
    })?;
    fonts.sort();
    Ok(fonts)
}

fn collect(dir: &Path, fonts: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, fonts)?;
        } else if is_font_file(&path) {
            fonts.push(path);
        }
    }
    Ok(())
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
}

/// Run a full indexing pass and write the HTML gallery
pub fn run(config: &IndexConfig) -> Result<IndexSummary> {
    fs::create_dir_all(&config.output_dir)?;

    let mut fonts = discover_fonts(&config.font_dir)?;
    if let Some(limit) = config.limit {
        fonts.truncate(limit);
    }
    log::info!("indexing {} font(s) from {}", fonts.len(), config.font_dir.display());

    let mut entries = Vec::with_capacity(fonts.len());
    let mut used_names = HashSet::new();
    for path in &fonts {
        entries.push(process_font(path, config, &mut used_names));
    }

    let summary = summarize(&entries);
    let page = html::gallery(config, &entries, &summary);
    fs::write(&config.html_file, page)?;
    log::info!(
        "wrote {}: {} rendered, {} flagged, {} failed",
        config.html_file.display(),
        summary.rendered,
        summary.flagged,
        summary.failed
    );
    Ok(summary)
}

fn summarize(entries: &[IndexEntry]) -> IndexSummary {
    let rendered = entries.iter().filter(|e| e.is_rendered()).count();
    IndexSummary {
        total: entries.len(),
        rendered,
        flagged: entries
            .iter()
            .filter(|e| e.is_rendered() && !e.quality.is_pass())
            .count(),
        failed: entries.len() - rendered,
    }
}

/// Process one font; errors become a failed entry, never a run failure
fn process_font(path: &Path, config: &IndexConfig, used_names: &mut HashSet<String>) -> IndexEntry {
    match try_process(path, config, used_names) {
        Ok(entry) => entry,
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            IndexEntry {
                path: path.to_owned(),
                names: NameInfo::default(),
                quality: Quality::Flagged(err.to_string()),
                status: EntryStatus::Failed {
                    reason: err.to_string(),
                },
            }
        }
    }
}

fn try_process(
    path: &Path,
    config: &IndexConfig,
    used_names: &mut HashSet<String>,
) -> Result<IndexEntry> {
    // Face handle lives for exactly this iteration.
    let face = FontFace::open(path)?;
    let names = face.names();

    let mut quality = quality::fast_check(&face);
    if config.slow_check && quality.is_pass() {
        quality = quality::slow_check(&face, config.font_size);
    }

    let image = config.output_dir.join(image_file_name(path, used_names));

    let spec = RenderSpec::new(config.text.clone(), config.font_size);
    raster::render_to_png(&face, &spec, &image)?;

    Ok(IndexEntry {
        path: path.to_owned(),
        names,
        quality,
        status: EntryStatus::Rendered { image },
    })
}

/// Thumbnail file name, unique within one run
///
/// Same-named fonts in different subdirectories would otherwise overwrite
/// each other's thumbnail; later entries get a path-hash suffix.
fn image_file_name(path: &Path, used: &mut HashSet<String>) -> String {
    let base = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => format!("{name}.png"),
        None => format!("font-{:x}.png", path_hash(path)),
    };
    let name = if used.contains(&base) {
        format!("{}-{:08x}.png", base.trim_end_matches(".png"), path_hash(path))
    } else {
        base
    };
    used.insert(name.clone());
    name
}

/// Stable stand-in for file names that are not valid UTF-8
fn path_hash(path: &Path) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}
