// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Typecase — catalog, render and inspect font collections
//!
//! Given a directory of TrueType/OpenType files, the batch indexer renders a
//! sample string with each font, runs quality heuristics and assembles an
//! HTML gallery; the single-font tools render one file or report raw glyph
//! metrics. The shared rendering core sizes its canvas from the face's
//! global vertical metrics so ascenders and descenders never clip, whatever
//! the sample text happens to contain.
//!
//! # Coordinate spaces
//!
//! Font files use integer *font units* with `units_per_em` units to the Em;
//! output uses pixels, with `font_size` pixels per Em. See [`Dpu`] for the
//! conversion and [`canvas`] for baseline placement.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use typecase::{FontFace, RenderSpec};
//!
//! let face = FontFace::open(Path::new("legacy.ttf"))?;
//! let spec = RenderSpec::new("Sphinx of black quartz", 24);
//! typecase::raster::render_to_png(&face, &spec, Path::new("legacy.png"))?;
//! # Ok::<(), typecase::Error>(())
//! ```

mod conv;
pub use conv::{px_ceil, Dpu};

pub mod canvas;
pub mod error;
pub mod face;
pub mod html;
pub mod index;
pub mod quality;
pub mod raster;

pub use canvas::{CanvasSize, Layout, RenderSpec, PADDING};
pub use error::{Error, Result};
pub use face::{FaceMetrics, Fallback, FontFace, GlyphBBox, GlyphId, NameInfo, VerticalMetrics};
pub use index::{IndexConfig, IndexEntry, IndexSummary};
pub use quality::Quality;
