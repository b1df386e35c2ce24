// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font face loading and metric extraction
//!
//! [`FontFace`] owns the bytes of one font file together with a parsed
//! [`ttf_parser::Face`] (metrics, character map, name table) and an
//! [`ab_glyph::FontRef`] (outlines) over the same bytes. A handle lives for
//! exactly one CLI invocation or one batch iteration; it is not shared.
//!
//! Character lookups take an explicit [`Fallback`] mode. Rendering callers
//! substitute the notdef glyph so that an image is always produced;
//! inspection callers fail with [`Error::CharacterNotMapped`] so that an
//! absence is surfaced rather than silently replaced.

use std::fs;
use std::path::{Path, PathBuf};

use ttf_parser::{name_id, Face};

use crate::conv::Dpu;
use crate::error::{Error, Result};

/// Glyph identifier within a font face
///
/// Identifier 0 is reserved for the "notdef" (missing character) glyph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphId(pub u16);

impl From<GlyphId> for ttf_parser::GlyphId {
    fn from(id: GlyphId) -> Self {
        ttf_parser::GlyphId(id.0)
    }
}

impl From<GlyphId> for ab_glyph::GlyphId {
    fn from(id: GlyphId) -> Self {
        ab_glyph::GlyphId(id.0)
    }
}

/// Policy for characters without a glyph mapping
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Substitute the notdef glyph (glyph 0)
    Notdef,
    /// Fail with [`Error::CharacterNotMapped`]
    Fail,
}

/// Global vertical metrics of a face, in font units
///
/// Sign convention: `descender` is stored as read from the font. Well-formed
/// fonts store it negative (below the baseline), but some legacy files store
/// a positive magnitude; [`VerticalMetrics::extent`] uses the magnitude so
/// that sizing is correct either way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VerticalMetrics {
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub units_per_em: u16,
}

impl VerticalMetrics {
    /// Full ascender-to-descender span in font units
    pub fn extent(&self) -> u32 {
        u32::try_from(i32::from(self.ascender).max(0)).unwrap_or(0)
            + u32::from(self.descender.unsigned_abs())
    }

    /// True if the metrics cannot produce a usable canvas
    ///
    /// With the magnitude convention for `descender` the only unrecoverable
    /// degeneracy is a non-positive ascender or a zero Em size.
    pub fn is_degenerate(&self) -> bool {
        self.ascender <= 0 || self.units_per_em == 0
    }
}

/// Bounding box of one glyph outline, in font units
///
/// Glyphs without an outline (e.g. space) have a zero-area box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBBox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl GlyphBBox {
    pub const ZERO: GlyphBBox = GlyphBBox {
        x_min: 0,
        y_min: 0,
        x_max: 0,
        y_max: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }
}

/// Identifying records from the font's name table
///
/// Only Unicode-encoded records are decoded; anything else is left unset.
#[derive(Clone, Debug, Default)]
pub struct NameInfo {
    pub family: Option<String>,
    pub style: Option<String>,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub copyright: Option<String>,
}

/// Read-only metric view over a font face
///
/// Canvas sizing and the quality checks are written against this trait so
/// they can be exercised with a fake face carrying handcrafted metrics,
/// independent of any real font file.
pub trait FaceMetrics {
    /// Global vertical metrics
    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Whether `c` has a glyph mapping
    fn has_glyph(&self, c: char) -> bool;

    /// Advance width of `c` in font units, substituting notdef if unmapped
    fn advance_units(&self, c: char) -> u16;

    /// Width of `text` in pixels at `dpem` pixels per Em
    ///
    /// Single-line advance-sum model: no shaping, no kerning. This is the
    /// same sum the rasterizer's pen movement performs, so a canvas sized
    /// from it cannot clip horizontally.
    fn measure(&self, text: &str, dpem: f32) -> f32 {
        let dpu = Dpu::new(dpem, self.vertical_metrics().units_per_em);
        text.chars().map(|c| dpu.u16_to_px(self.advance_units(c))).sum()
    }

    /// Width of `text` in pixels with pair kerning applied
    ///
    /// Used by the slow quality check to compare against the plain
    /// advance-sum width. Defaults to [`FaceMetrics::measure`] for faces
    /// without kerning data.
    fn measure_kerned(&self, text: &str, dpem: f32) -> f32 {
        self.measure(text, dpem)
    }
}

pub(crate) unsafe fn extend_lifetime<'b, T: ?Sized>(r: &'b T) -> &'static T {
    std::mem::transmute::<&'b T, &'static T>(r)
}

/// An opened font file
pub struct FontFace {
    // Safety: `face` and `raster` borrow from `data`. They are dropped
    // before `data` (declaration order) and the boxed slice is never moved
    // out of or mutated while the handle lives.
    face: Face<'static>,
    raster: ab_glyph::FontRef<'static>,
    #[allow(unused)]
    data: Box<[u8]>,
    path: PathBuf,
}

impl FontFace {
    /// Open and parse the font file at `path`
    ///
    /// Reads the whole file into memory. Collections are not supported;
    /// only the first face of a file is used.
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .map_err(|source| Error::FileNotReadable {
                path: path.to_owned(),
                source,
            })?
            .into_boxed_slice();
        let slice = unsafe { extend_lifetime(&data[..]) };
        let face = Face::parse(slice, 0).map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })?;
        let raster = ab_glyph::FontRef::try_from_slice(slice)?;
        log::debug!("opened font face: {}", path.display());
        Ok(FontFace {
            face,
            raster,
            data,
            path: path.to_owned(),
        })
    }

    /// Path this face was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a character through the character map
    pub fn glyph_index(&self, c: char, fallback: Fallback) -> Result<GlyphId> {
        match self.face.glyph_index(c) {
            Some(id) => Ok(GlyphId(id.0)),
            None => match fallback {
                Fallback::Notdef => Ok(GlyphId(0)),
                Fallback::Fail => Err(Error::CharacterNotMapped(c)),
            },
        }
    }

    /// Advance width of `c` in font units
    pub fn advance(&self, c: char, fallback: Fallback) -> Result<u16> {
        let id = self.glyph_index(c, fallback)?;
        Ok(self.face.glyph_hor_advance(id.into()).unwrap_or(0))
    }

    /// Bounding box of the glyph for `c`, in font units
    ///
    /// A mapped glyph without an outline yields [`GlyphBBox::ZERO`], not an
    /// error.
    pub fn glyph_bbox(&self, c: char, fallback: Fallback) -> Result<GlyphBBox> {
        let id = self.glyph_index(c, fallback)?;
        Ok(self
            .face
            .glyph_bounding_box(id.into())
            .map(|r| GlyphBBox {
                x_min: r.x_min,
                y_min: r.y_min,
                x_max: r.x_max,
                y_max: r.y_max,
            })
            .unwrap_or(GlyphBBox::ZERO))
    }

    /// Decode identifying records from the name table
    pub fn names(&self) -> NameInfo {
        let mut info = NameInfo::default();
        let names = self.face.names();
        for i in 0..names.len() {
            let Some(name) = names.get(i) else { continue };
            let slot = match name.name_id {
                name_id::FAMILY => &mut info.family,
                name_id::SUBFAMILY => &mut info.style,
                name_id::FULL_NAME => &mut info.full_name,
                name_id::VERSION => &mut info.version,
                name_id::COPYRIGHT_NOTICE => &mut info.copyright,
                _ => continue,
            };
            if slot.is_none() {
                *slot = name.to_string();
            }
        }
        info
    }

    /// Pixels-per-font-unit scale at `dpem` pixels per Em
    pub fn dpu(&self, dpem: f32) -> Dpu {
        Dpu::new(dpem, self.face.units_per_em())
    }

    /// Scale for the raster backend at `dpem` pixels per Em
    ///
    /// `ab_glyph` scales are relative to the face's unscaled height rather
    /// than its Em size, hence the correction factor.
    pub fn px_scale(&self, dpem: f32) -> ab_glyph::PxScale {
        use ab_glyph::Font;
        let upem = f32::from(self.face.units_per_em());
        let scale = if upem > 0.0 {
            dpem * self.raster.height_unscaled() / upem
        } else {
            dpem
        };
        scale.into()
    }

    /// The raster backend's view of this face
    pub(crate) fn outline_font(&self) -> &ab_glyph::FontRef<'static> {
        &self.raster
    }
}

impl FaceMetrics for FontFace {
    fn vertical_metrics(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascender: self.face.ascender(),
            descender: self.face.descender(),
            line_gap: self.face.line_gap(),
            units_per_em: self.face.units_per_em(),
        }
    }

    fn has_glyph(&self, c: char) -> bool {
        self.face.glyph_index(c).is_some()
    }

    fn advance_units(&self, c: char) -> u16 {
        let id = self.face.glyph_index(c).unwrap_or(ttf_parser::GlyphId(0));
        self.face.glyph_hor_advance(id).unwrap_or(0)
    }

    fn measure_kerned(&self, text: &str, dpem: f32) -> f32 {
        use ab_glyph::{Font, ScaleFont};
        let scaled = self.raster.as_scaled(self.px_scale(dpem));
        let mut caret = 0.0;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for c in text.chars() {
            let id = self.raster.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        caret
    }
}
