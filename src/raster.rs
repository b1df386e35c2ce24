// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rasterizing sample text
//!
//! Glyphs are outlined with `ab_glyph` and their coverage blended into an
//! RGBA buffer: transparent background, black ink. The pen starts at the
//! left padding edge on the baseline computed by [`crate::canvas::layout`]
//! and advances by the same scaled advance widths used for measurement, so
//! drawing can never overrun the canvas.

use std::path::Path;

use ab_glyph::Font;
use easy_cast::{CastFloat, Conv};
use image::{Rgba, RgbaImage};

use crate::canvas::{self, CanvasSize, RenderSpec, PADDING};
use crate::error::{Error, Result};
use crate::face::{FaceMetrics, Fallback, FontFace};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Render `spec` with `face` and write a PNG to `out`
///
/// Overwrites an existing file. Returns the canvas size written.
///
/// Fails with [`Error::Render`] if the text contains visible characters but
/// the raster backend could not produce a single outline, and with
/// [`Error::Image`] / [`Error::Io`] on output failures.
pub fn render_to_png(face: &FontFace, spec: &RenderSpec, out: &Path) -> Result<CanvasSize> {
    let layout = canvas::layout(face, spec);
    let img = draw(face, spec, &layout)?;
    img.save_with_format(out, image::ImageFormat::Png)?;
    log::info!(
        "rendered {}x{} px for {} to {}",
        layout.size.width,
        layout.size.height,
        face.path().display(),
        out.display()
    );
    Ok(layout.size)
}

fn draw(face: &FontFace, spec: &RenderSpec, layout: &canvas::Layout) -> Result<RgbaImage> {
    let CanvasSize { width, height } = layout.size;
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    let dpem = spec.dpem();
    let scale = face.px_scale(dpem);
    let dpu = face.dpu(dpem);
    let font = face.outline_font();

    let mut caret = PADDING as f32;
    let mut outlined = 0usize;
    let mut visible = 0usize;

    for c in spec.text.chars() {
        if !c.is_whitespace() {
            visible += 1;
        }
        // Infallible with the notdef fallback.
        let id = face.glyph_index(c, Fallback::Notdef)?;
        let glyph = ab_glyph::Glyph {
            id: id.into(),
            scale,
            position: ab_glyph::point(caret, layout.baseline),
        };
        if let Some(outline) = font.outline_glyph(glyph) {
            outlined += 1;
            blend_outline(&mut img, &outline);
        }
        caret += dpu.u16_to_px(face.advance_units(c));
    }

    if visible > 0 && outlined == 0 {
        return Err(Error::Render(format!(
            "no glyph of {:?} could be outlined",
            spec.text
        )));
    }
    Ok(img)
}

fn blend_outline(img: &mut RgbaImage, outline: &ab_glyph::OutlinedGlyph) {
    let bounds = outline.px_bounds();
    let x0: i32 = bounds.min.x.cast_trunc();
    let y0: i32 = bounds.min.y.cast_trunc();
    let (width, height) = img.dimensions();

    outline.draw(|x, y, c| {
        let px = x0 + i32::conv(x);
        let py = y0 + i32::conv(y);
        if px < 0 || py < 0 {
            return;
        }
        let (px, py) = (u32::conv(px), u32::conv(py));
        if px >= width || py >= height {
            return;
        }
        // `as` clamps, so full coverage lands on 255 rather than wrapping.
        let alpha = (c * 256.0) as u8;
        let pixel = img.get_pixel_mut(px, py);
        if alpha > pixel.0[3] {
            *pixel = Rgba([0, 0, 0, alpha]);
        }
    });
}
