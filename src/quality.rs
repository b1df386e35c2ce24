// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font quality heuristics
//!
//! Two tiers, both read-only probes over a [`FaceMetrics`] view:
//!
//! - [`fast_check`] verifies the basic alphabet is usable: every
//!   alphanumeric ASCII character mapped, no zero or absurdly large advance,
//!   a sanely sized space, non-degenerate vertical metrics.
//! - [`slow_check`] measures a spaced vs. unspaced probe string to catch
//!   fonts whose space or kerning data blows up inter-word gaps.
//!
//! A flagged font still renders and still appears in the catalog; the flag
//! and its reason are shown next to the thumbnail.

use crate::face::FaceMetrics;

/// Characters every catalog-worthy font is expected to map
pub const REQUIRED_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Outcome of a quality check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quality {
    Pass,
    /// Check failed; the reason is human-readable
    Flagged(String),
}

impl Quality {
    pub fn is_pass(&self) -> bool {
        matches!(self, Quality::Pass)
    }

    /// Failure reason, if flagged
    pub fn reason(&self) -> Option<&str> {
        match self {
            Quality::Pass => None,
            Quality::Flagged(reason) => Some(reason),
        }
    }
}

/// Cheap per-font check: character coverage and metric sanity
pub fn fast_check(face: &impl FaceMetrics) -> Quality {
    let vm = face.vertical_metrics();
    if vm.is_degenerate() {
        return Quality::Flagged(format!(
            "degenerate vertical metrics (ascender {}, descender {})",
            vm.ascender, vm.descender
        ));
    }
    let upem = u32::from(vm.units_per_em);

    let mut total = 0u64;
    let mut count = 0u64;
    for c in REQUIRED_CHARS.chars() {
        if !face.has_glyph(c) {
            return Quality::Flagged(format!("character '{c}' is not mapped"));
        }
        let advance = u32::from(face.advance_units(c));
        if advance == 0 {
            return Quality::Flagged(format!("character '{c}' has zero width"));
        }
        if advance > upem * 10 {
            return Quality::Flagged(format!("character '{c}' has excessively large width"));
        }
        total += u64::from(advance);
        count += 1;
    }

    if !face.has_glyph(' ') {
        return Quality::Flagged("no space character".into());
    }
    let average = total / count;
    let space = u64::from(face.advance_units(' '));
    if space > average * 3 {
        return Quality::Flagged("space character is excessively wide".into());
    }

    Quality::Pass
}

/// Thorough check: compare spaced and unspaced measurements of a probe string
///
/// Both strings are measured with pair kerning applied. If inserting four
/// spaces widens the text by more than four times the width of a space, the
/// font's spacing or kerning data is suspect.
pub fn slow_check(face: &impl FaceMetrics, font_size: u32) -> Quality {
    let dpem = font_size as f32;
    let with_spaces = face.measure_kerned("A B C D E", dpem);
    let no_spaces = face.measure_kerned("ABCDE", dpem);
    let space = face.measure(" ", dpem);

    if (with_spaces - no_spaces) > space * 4.0 {
        Quality::Flagged("potential kerning issue".into())
    } else {
        Quality::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::VerticalMetrics;

    struct ProbeFace {
        advance: u16,
        space: u16,
        unmapped: Option<char>,
        zero_width: Option<char>,
        /// Extra pixels added after every space when measuring kerned
        space_kern_px: f32,
        vm: VerticalMetrics,
    }

    impl Default for ProbeFace {
        fn default() -> Self {
            ProbeFace {
                advance: 600,
                space: 300,
                unmapped: None,
                zero_width: None,
                space_kern_px: 0.0,
                vm: VerticalMetrics {
                    ascender: 800,
                    descender: -200,
                    line_gap: 0,
                    units_per_em: 1000,
                },
            }
        }
    }

    impl FaceMetrics for ProbeFace {
        fn vertical_metrics(&self) -> VerticalMetrics {
            self.vm
        }
        fn has_glyph(&self, c: char) -> bool {
            self.unmapped != Some(c)
        }
        fn advance_units(&self, c: char) -> u16 {
            if c == ' ' {
                self.space
            } else if self.zero_width == Some(c) {
                0
            } else {
                self.advance
            }
        }
        fn measure_kerned(&self, text: &str, dpem: f32) -> f32 {
            let spaces = text.chars().filter(|c| *c == ' ').count() as f32;
            self.measure(text, dpem) + spaces * self.space_kern_px
        }
    }

    #[test]
    fn healthy_font_passes() {
        assert_eq!(fast_check(&ProbeFace::default()), Quality::Pass);
        assert_eq!(slow_check(&ProbeFace::default(), 24), Quality::Pass);
    }

    #[test]
    fn unmapped_required_char_is_flagged() {
        let face = ProbeFace {
            unmapped: Some('Q'),
            ..Default::default()
        };
        assert_eq!(
            fast_check(&face),
            Quality::Flagged("character 'Q' is not mapped".into())
        );
    }

    #[test]
    fn zero_width_is_flagged() {
        let face = ProbeFace {
            zero_width: Some('i'),
            ..Default::default()
        };
        assert_eq!(
            fast_check(&face),
            Quality::Flagged("character 'i' has zero width".into())
        );
    }

    #[test]
    fn oversized_space_is_flagged() {
        let face = ProbeFace {
            space: 2000,
            ..Default::default()
        };
        assert!(!fast_check(&face).is_pass());
    }

    #[test]
    fn degenerate_metrics_are_flagged() {
        let mut face = ProbeFace::default();
        face.vm.ascender = -10;
        assert!(!fast_check(&face).is_pass());
    }

    #[test]
    fn kerning_blowup_trips_slow_check() {
        // Each space adds 40 px of spurious kerning: at size 24 the four
        // spaces widen the probe far beyond 4 × the 7.2 px space width.
        let face = ProbeFace {
            space_kern_px: 40.0,
            ..Default::default()
        };
        assert!(fast_check(&face).is_pass());
        assert_eq!(
            slow_check(&face, 24),
            Quality::Flagged("potential kerning issue".into())
        );
    }
}
