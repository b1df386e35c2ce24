// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Single-font renderer and inspector.
//!
//! Renders sample text with one font to a PNG, or, with one of the inspect
//! flags, prints raw metrics for a single character instead. Unlike the
//! batch indexer, every error here is fatal and names the font file.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use clap::Parser;

use typecase::{raster, FaceMetrics, Fallback, FontFace, RenderSpec, Result};

#[derive(Parser)]
#[command(version, about = "Render sample text with a font file")]
struct Cli {
    /// Path to the font file to use
    #[arg(long)]
    font: PathBuf,

    /// Font size (pixels per Em) used for rendering
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: u32,

    /// Text to render
    #[arg(long, default_value = "The quick brown fox jumps over the lazy dog.")]
    text: String,

    /// Output filename
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Open the rendered image with an external viewer (eog)
    #[arg(long)]
    preview: bool,

    /// Print advance width and units-per-Em for one character, then exit
    #[arg(long, value_name = "CHAR", conflicts_with = "inspect_glyph_bbox")]
    inspect: Option<char>,

    /// Print the bounding box of one glyph, then exit
    #[arg(long, value_name = "CHAR")]
    inspect_glyph_bbox: Option<char>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", cli.font.display());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let face = FontFace::open(&cli.font)?;

    // Inspection short-circuits rendering entirely. It never substitutes
    // the notdef glyph: an unmapped character is a reportable absence.
    if let Some(c) = cli.inspect {
        let advance = face.advance(c, Fallback::Fail)?;
        let vm = face.vertical_metrics();
        println!("Metrics for character {c:?} in {}:", cli.font.display());
        println!("  Advance Width: {advance}");
        println!("  Units Per Em: {}", vm.units_per_em);
        return Ok(());
    }
    if let Some(c) = cli.inspect_glyph_bbox {
        let bbox = face.glyph_bbox(c, Fallback::Fail)?;
        println!("Glyph bounding box for character {c:?} in {}:", cli.font.display());
        println!("  xMin: {}", bbox.x_min);
        println!("  yMin: {}", bbox.y_min);
        println!("  xMax: {}", bbox.x_max);
        println!("  yMax: {}", bbox.y_max);
        return Ok(());
    }

    let spec = RenderSpec::new(cli.text.clone(), cli.font_size);
    let size = raster::render_to_png(&face, &spec, &cli.output)?;
    println!(
        "Rendered {}x{} px to {}",
        size.width,
        size.height,
        cli.output.display()
    );

    if cli.preview {
        match Command::new("eog").arg(&cli.output).status() {
            Ok(status) if !status.success() => {
                eprintln!("viewer exited with {status}");
            }
            Ok(_) => {}
            Err(err) => eprintln!("eog not found ({err}); install it to use --preview"),
        }
    }
    Ok(())
}
