// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Unit conversion utilities
//!
//! Font files measure everything in *font units*, an internal integer scale
//! with `units_per_em` units to the Em. Raster output is measured in pixels.
//! With `dpem` pixels per Em, the conversion is:
//!
//! ```none
//! pixels = units × dpem / units_per_em
//! ```
//!
//! [`Dpu`] captures the `dpem / units_per_em` factor. Whenever a pixel
//! *extent* (a width or height of a canvas) is derived from such a value it
//! is rounded up via [`px_ceil`]; glyph *positions* stay fractional and are
//! resolved by the rasterizer.

use easy_cast::ConvFloat;

/// Scale factor: pixels per font unit
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dpu(pub f32);

impl Dpu {
    /// Construct from pixels-per-Em and the font's units-per-Em
    ///
    /// A degenerate `units_per_em` of zero yields a zero scale (the caller
    /// is expected to have clamped such metrics already).
    pub fn new(dpem: f32, units_per_em: u16) -> Self {
        if units_per_em == 0 {
            Dpu(0.0)
        } else {
            Dpu(dpem / f32::from(units_per_em))
        }
    }

    pub fn i16_to_px(self, x: i16) -> f32 {
        f32::from(x) * self.0
    }

    pub fn u16_to_px(self, x: u16) -> f32 {
        f32::from(x) * self.0
    }
}

/// Round a pixel extent up to a whole number of pixels
///
/// Negative inputs clamp to zero.
#[inline]
pub fn px_ceil(x: f32) -> u32 {
    u32::conv_ceil(x.max(0.0))
}
