// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Canvas sizing
//!
//! The canvas for a sample string is sized from the face's *global* vertical
//! metrics, never from the ink bounds of the particular string: a sample
//! without descenders must still leave room for every descender the font can
//! produce, otherwise other glyphs at the same size would clip. The baseline
//! is placed `ascender × dpem / units_per_em` pixels below the padding line,
//! so the full ascender-to-descender span fits by construction.
//!
//! Layout is a pure function of the [`FaceMetrics`] view and the
//! [`RenderSpec`]; rendering the same spec twice yields the same canvas.

use crate::conv::{px_ceil, Dpu};
use crate::face::FaceMetrics;

/// Fixed margin in pixels on every side of the rendered text
///
/// Absorbs rounding and anti-aliasing overshoot at the canvas edge.
pub const PADDING: u32 = 10;

/// What to render: a single-line sample string at a pixel-per-Em size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSpec {
    pub text: String,
    /// Pixels per Em; must be positive
    pub font_size: u32,
}

impl RenderSpec {
    pub fn new(text: impl Into<String>, font_size: u32) -> Self {
        debug_assert!(font_size > 0);
        RenderSpec {
            text: text.into(),
            font_size,
        }
    }

    pub fn dpem(&self) -> f32 {
        self.font_size as f32
    }
}

/// Canvas dimensions in pixels
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// A computed canvas with baseline placement
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub size: CanvasSize,
    /// Baseline row, in pixels from the canvas top (fractional)
    pub baseline: f32,
    /// True if vertical metrics were degenerate and clamped to the Em size
    pub clamped: bool,
}

/// Compute the canvas for `spec` rendered with `face`
///
/// Guarantees, for any face and any `font_size > 0`:
///
/// - `size.height ≥ ceil((ascender + |descender|) × font_size / units_per_em)`
/// - `size.width ≥ measure(text)`
/// - the canvas is never empty, even for empty text
///
/// Degenerate metrics (non-positive ascender or zero units-per-Em) clamp
/// the vertical extent to one Em and are logged; they never fail.
pub fn layout(face: &impl FaceMetrics, spec: &RenderSpec) -> Layout {
    let vm = face.vertical_metrics();
    let dpem = spec.dpem();

    let (ascent_px, extent_px, clamped) = if vm.is_degenerate() {
        log::warn!(
            "degenerate vertical metrics (ascender {}, descender {}, upem {}); \
             clamping canvas height to the Em size",
            vm.ascender,
            vm.descender,
            vm.units_per_em
        );
        // Place the baseline near the bottom, as most fonts do.
        (dpem * 0.8, spec.font_size, true)
    } else {
        let dpu = Dpu::new(dpem, vm.units_per_em);
        let ascent = dpu.i16_to_px(vm.ascender);
        let extent = px_ceil(ascent + dpu.u16_to_px(vm.descender.unsigned_abs()));
        (ascent, extent, false)
    };

    let text_width = px_ceil(face.measure(&spec.text, dpem));

    let size = CanvasSize {
        width: (text_width + 2 * PADDING).max(1),
        height: (extent_px + 2 * PADDING).max(1),
    };
    Layout {
        size,
        baseline: PADDING as f32 + ascent_px,
        clamped,
    }
}
