// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Batch indexer: render every font under a directory into an HTML gallery.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use typecase::index::{self, IndexConfig};

#[derive(Parser)]
#[command(version, about = "Generate an HTML index of a font collection")]
struct Cli {
    /// Text to render for each font
    #[arg(long, default_value = "The quick brown fox jumps over the lazy dog.")]
    text: String,

    /// Directory to save rendered images
    #[arg(long, default_value = "renders")]
    output_dir: PathBuf,

    /// Name of the output HTML file
    #[arg(long, default_value = "index.html")]
    html_file: PathBuf,

    /// Font size (pixels per Em) used for rendering
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: u32,

    /// Perform a slower, more thorough check for font quality issues
    #[arg(long)]
    slow_check: bool,

    /// Directory to search for TrueType and OpenType fonts
    #[arg(long, default_value = ".")]
    font_dir: PathBuf,

    /// Limit the total number of fonts processed
    #[arg(short = 'n', long = "number")]
    number: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = IndexConfig {
        font_dir: cli.font_dir,
        output_dir: cli.output_dir,
        html_file: cli.html_file,
        text: cli.text,
        font_size: cli.font_size,
        slow_check: cli.slow_check,
        limit: cli.number,
    };

    // Per-font failures are reported inside the gallery; only setup errors
    // reach this point.
    match index::run(&config) {
        Ok(summary) => {
            println!(
                "{} font(s): {} rendered, {} flagged, {} failed; gallery at {}",
                summary.total,
                summary.rendered,
                summary.flagged,
                summary.failed,
                config.html_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
